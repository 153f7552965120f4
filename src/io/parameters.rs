//! SPAMS parameter table.
//!
//! One row per parcel, produced by an upstream calibration against InSAR
//! displacement. The table is a headered CSV with the columns
//! `pnt_id, xP, xE, xI, tau, var_xP, var_xE, var_xI, rss, dof, pnt_lon,
//! pnt_lat` and optionally `meteo_id` linking the parcel to a station.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SpamsError};
use crate::model::Parameters;

/// Calibrated parameters and fit statistics for one parcel.
///
/// Identifiers and coordinates are pass-through metadata for display; only
/// the numeric model fields feed the computation.
#[derive(Debug, Clone)]
pub struct ParcelRecord {
    pub pnt_id: String,
    pub x_p: f64,
    pub x_e: f64,
    pub x_i: f64,
    pub tau: usize,
    pub var_x_p: f64,
    pub var_x_e: f64,
    pub var_x_i: f64,
    pub rss: f64,
    pub dof: u32,
    pub lon: f64,
    pub lat: f64,
    pub meteo_id: Option<String>,
}

impl ParcelRecord {
    /// Build validated model parameters from this row.
    pub fn parameters(&self) -> Result<Parameters> {
        Parameters::new(self.x_p, self.x_e, self.x_i, self.tau)
    }
}

/// Load the full parameter table.
pub fn read_parameter_table<P: AsRef<Path>>(path: P) -> Result<Vec<ParcelRecord>> {
    let file = File::open(path)?;
    parse_parameter_table(BufReader::new(file))
}

fn parse_parameter_table<R: BufRead>(reader: R) -> Result<Vec<ParcelRecord>> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => {
                return Err(SpamsError::Malformed {
                    line: 0,
                    reason: "parameter table is empty".to_string(),
                })
            }
        }
    };

    let columns: HashMap<String, usize> = header
        .split(',')
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect();
    let required = |name: &str| -> Result<usize> {
        columns.get(name).copied().ok_or_else(|| SpamsError::Malformed {
            line: 1,
            reason: format!("parameter table is missing column {name:?}"),
        })
    };

    let col_pnt_id = required("pnt_id")?;
    let col_x_p = required("xP")?;
    let col_x_e = required("xE")?;
    let col_x_i = required("xI")?;
    let col_tau = required("tau")?;
    let col_var_x_p = required("var_xP")?;
    let col_var_x_e = required("var_xE")?;
    let col_var_x_i = required("var_xI")?;
    let col_rss = required("rss")?;
    let col_dof = required("dof")?;
    let col_lon = required("pnt_lon")?;
    let col_lat = required("pnt_lat")?;
    let col_meteo_id = columns.get("meteo_id").copied();

    let mut records = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < columns.len() {
            return Err(SpamsError::Malformed {
                line: idx + 1,
                reason: format!(
                    "expected {} fields, got {}",
                    columns.len(),
                    fields.len()
                ),
            });
        }

        let float = |col: usize| -> Result<f64> {
            fields[col].parse().map_err(|_| SpamsError::Malformed {
                line: idx + 1,
                reason: format!("unreadable numeric field {:?}", fields[col]),
            })
        };

        records.push(ParcelRecord {
            pnt_id: fields[col_pnt_id].to_string(),
            x_p: float(col_x_p)?,
            x_e: float(col_x_e)?,
            x_i: float(col_x_i)?,
            tau: fields[col_tau].parse().map_err(|_| SpamsError::Malformed {
                line: idx + 1,
                reason: format!("unreadable tau {:?}", fields[col_tau]),
            })?,
            var_x_p: float(col_var_x_p)?,
            var_x_e: float(col_var_x_e)?,
            var_x_i: float(col_var_x_i)?,
            rss: float(col_rss)?,
            dof: fields[col_dof].parse().map_err(|_| SpamsError::Malformed {
                line: idx + 1,
                reason: format!("unreadable dof {:?}", fields[col_dof]),
            })?,
            lon: float(col_lon)?,
            lat: float(col_lat)?,
            meteo_id: col_meteo_id.map(|c| fields[c].to_string()),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    const HEADER: &str =
        "pnt_id,xP,xE,xI,tau,var_xP,var_xE,var_xI,rss,dof,pnt_lon,pnt_lat";

    #[test]
    fn parses_a_row() {
        let text = format!(
            "{HEADER}\n1042,0.26,0.35,0.044,52,0.001,0.002,0.0004,95.2,98,4.61,51.96\n"
        );
        let records = parse_parameter_table(Cursor::new(text)).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.pnt_id, "1042");
        assert_relative_eq!(r.x_p, 0.26);
        assert_relative_eq!(r.x_i, 0.044);
        assert_eq!(r.tau, 52);
        assert_eq!(r.dof, 98);
        assert!(r.meteo_id.is_none());
    }

    #[test]
    fn columns_may_be_reordered() {
        let text = "xI,pnt_id,xP,xE,tau,var_xP,var_xE,var_xI,rss,dof,pnt_lon,pnt_lat\n\
                    0.05,7,0.2,0.3,30,0,0,0,1,1,4.0,52.0\n";
        let records = parse_parameter_table(Cursor::new(text)).unwrap();
        assert_eq!(records[0].pnt_id, "7");
        assert_relative_eq!(records[0].x_i, 0.05);
    }

    #[test]
    fn optional_station_link() {
        let text = format!(
            "{HEADER},meteo_id\n1,0.2,0.3,0.05,30,0,0,0,1,1,4.0,52.0,344\n"
        );
        let records = parse_parameter_table(Cursor::new(text)).unwrap();
        assert_eq!(records[0].meteo_id.as_deref(), Some("344"));
    }

    #[test]
    fn missing_column_is_malformed() {
        let text = "pnt_id,xP,xE\n1,0.2,0.3\n";
        let r = parse_parameter_table(Cursor::new(text));
        assert!(matches!(r, Err(SpamsError::Malformed { .. })));
    }

    #[test]
    fn short_row_is_malformed() {
        let text = format!("{HEADER}\n1,0.2,0.3\n");
        let r = parse_parameter_table(Cursor::new(text));
        assert!(matches!(r, Err(SpamsError::Malformed { line: 2, .. })));
    }

    #[test]
    fn empty_table_is_malformed() {
        let r = parse_parameter_table(Cursor::new(""));
        assert!(matches!(r, Err(SpamsError::Malformed { .. })));
    }

    #[test]
    fn record_builds_model_parameters() {
        let text = format!(
            "{HEADER}\n1,0.2,0.3,0.05,30,0,0,0,1,1,4.0,52.0\n"
        );
        let records = parse_parameter_table(Cursor::new(text)).unwrap();
        let p = records[0].parameters().unwrap();
        assert_eq!(p.tau, 30);
    }

    #[test]
    fn zero_tau_row_fails_at_parameter_construction() {
        let text = format!(
            "{HEADER}\n1,0.2,0.3,0.05,0,0,0,0,1,1,4.0,52.0\n"
        );
        let records = parse_parameter_table(Cursor::new(text)).unwrap();
        assert!(records[0].parameters().is_err());
    }
}
