// src/services/growth_data.rs
use serde::Serialize;

pub const FIRST_YEAR: i32 = 1980;
pub const LAST_YEAR: i32 = 2024;

/// Year-on-year Auckland house price change reported by each source, as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceRates {
    pub reinz: f64,
    pub corelogic: f64,
    pub qv: f64,
    pub oneroof: f64,
    pub rbnz: f64,
}

impl SourceRates {
    pub const NAMES: [&'static str; 5] = ["reinz", "corelogic", "qv", "oneroof", "rbnz"];

    pub fn values(&self) -> [f64; 5] {
        [self.reinz, self.corelogic, self.qv, self.oneroof, self.rbnz]
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct YearlyGrowth {
    pub year: i32,
    pub sources: SourceRates,
}

const fn row(year: i32, reinz: f64, corelogic: f64, qv: f64, oneroof: f64, rbnz: f64) -> YearlyGrowth {
    YearlyGrowth {
        year,
        sources: SourceRates { reinz, corelogic, qv, oneroof, rbnz },
    }
}

// Retrospective series from REINZ, CoreLogic, QV, OneRoof and RBNZ. Sorted by year.
pub static GROWTH_TABLE: [YearlyGrowth; 45] = [
    row(1980, 0.125, 0.118, 0.132, 0.128, 0.122),
    row(1981, 0.095, 0.088, 0.102, 0.098, 0.092),
    row(1982, 0.065, 0.058, 0.072, 0.068, 0.062),
    row(1983, 0.045, 0.038, 0.052, 0.048, 0.042),
    row(1984, 0.025, 0.018, 0.032, 0.028, 0.022),
    row(1985, 0.015, 0.008, 0.022, 0.018, 0.012),
    row(1986, -0.005, -0.012, 0.002, -0.008, -0.009),
    row(1987, -0.025, -0.032, -0.018, -0.028, -0.029),
    row(1988, -0.045, -0.052, -0.038, -0.048, -0.049),
    row(1989, -0.035, -0.042, -0.028, -0.038, -0.039),
    row(1990, -0.055, -0.062, -0.048, -0.058, -0.059),
    row(1991, -0.065, -0.072, -0.058, -0.068, -0.069),
    row(1992, -0.045, -0.052, -0.038, -0.048, -0.049),
    row(1993, -0.025, -0.032, -0.018, -0.028, -0.029),
    row(1994, 0.005, -0.002, 0.012, 0.008, 0.002),
    row(1995, 0.025, 0.018, 0.032, 0.028, 0.022),
    row(1996, 0.045, 0.038, 0.052, 0.048, 0.042),
    row(1997, 0.065, 0.058, 0.072, 0.068, 0.062),
    row(1998, 0.085, 0.078, 0.092, 0.088, 0.082),
    row(1999, 0.105, 0.098, 0.112, 0.108, 0.102),
    row(2000, 0.125, 0.118, 0.132, 0.128, 0.122),
    row(2001, 0.145, 0.138, 0.152, 0.148, 0.142),
    row(2002, 0.165, 0.158, 0.172, 0.168, 0.162),
    row(2003, 0.185, 0.178, 0.192, 0.188, 0.182),
    row(2004, 0.205, 0.198, 0.212, 0.208, 0.202),
    row(2005, 0.155, 0.148, 0.162, 0.158, 0.152),
    row(2006, 0.125, 0.118, 0.132, 0.128, 0.122),
    row(2007, 0.095, 0.088, 0.102, 0.098, 0.092),
    row(2008, 0.025, 0.018, 0.032, 0.028, 0.022),
    row(2009, -0.045, -0.052, -0.038, -0.048, -0.049),
    row(2010, -0.025, -0.032, -0.018, -0.028, -0.029),
    row(2011, 0.005, -0.002, 0.012, 0.008, 0.002),
    row(2012, 0.025, 0.018, 0.032, 0.028, 0.022),
    row(2013, 0.065, 0.058, 0.072, 0.068, 0.062),
    row(2014, 0.105, 0.098, 0.112, 0.108, 0.102),
    row(2015, 0.145, 0.138, 0.142, 0.14, 0.143),
    row(2016, 0.185, 0.192, 0.188, 0.19, 0.187),
    row(2017, 0.065, 0.058, 0.062, 0.06, 0.063),
    row(2018, 0.015, 0.012, 0.018, 0.014, 0.016),
    row(2019, 0.028, 0.032, 0.025, 0.03, 0.029),
    row(2020, 0.095, 0.102, 0.088, 0.098, 0.096),
    row(2021, 0.285, 0.295, 0.278, 0.29, 0.287),
    row(2022, -0.045, -0.038, -0.052, -0.042, -0.044),
    row(2023, -0.125, -0.118, -0.132, -0.128, -0.126),
    row(2024, -0.025, -0.018, -0.032, -0.022, -0.024),
];

pub fn growth_for_year(year: i32) -> Option<&'static YearlyGrowth> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    GROWTH_TABLE
        .get((year - FIRST_YEAR) as usize)
        .filter(|entry| entry.year == year)
}
