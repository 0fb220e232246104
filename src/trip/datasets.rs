//! Trip planning datasets
//!
//! The dashboard's hotel, bus-route, and attraction tables ship as
//! header-labelled CSV text. Parsing is tolerant in the same way the
//! dashboard was: a row missing its name/city is rejected with a reason,
//! while an unparsable charge simply becomes "no charge known" and
//! contributes nothing to cost estimates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Hotel or hospital entry from the accommodation dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    /// "Hotel" or "Hospital" in the published data
    pub category: String,
    pub city: String,
    pub phone: String,
    pub room_charge: Option<u32>,
}

/// Intercity bus connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusRoute {
    pub origin: String,
    pub destination: String,
    pub duration: String,
    pub fare: Option<u32>,
}

/// Sight with its entry fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub city: String,
    pub entry_fee: Option<u32>,
}

/// Errors that make a dataset unusable as a whole
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The text had no header line
    EmptyInput,
    /// A required column is missing from the header
    MissingColumn { column: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::EmptyInput => write!(f, "Dataset text is empty"),
            DatasetError::MissingColumn { column } => {
                write!(f, "Dataset header is missing column '{}'", column)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// Parsed dataset with per-row rejections
#[derive(Debug, Clone)]
pub struct ParsedDataset<T> {
    pub records: Vec<T>,
    /// (1-based data row number, reason)
    pub rejected: Vec<(usize, String)>,
}

/// Header-line column lookup
struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    fn parse(line: &str) -> Self {
        let columns = line
            .split(',')
            .enumerate()
            .map(|(index, name)| (name.trim().to_string(), index))
            .collect();
        Self { columns }
    }

    fn require(&self, column: &str) -> Result<usize, DatasetError> {
        self.columns.get(column).copied().ok_or(DatasetError::MissingColumn {
            column: column.to_string(),
        })
    }

    fn field<'a>(&self, fields: &'a [&'a str], index: usize) -> &'a str {
        fields.get(index).map(|f| f.trim()).unwrap_or("")
    }
}

/// The published datasets carry no quoting; a plain comma split matches
/// how the dashboard read them
fn data_rows(text: &str) -> Result<(HeaderMap, Vec<(usize, Vec<&str>)>), DatasetError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = HeaderMap::parse(lines.next().ok_or(DatasetError::EmptyInput)?);
    let rows = lines
        .enumerate()
        .map(|(i, line)| (i + 1, line.split(',').collect()))
        .collect();
    Ok((header, rows))
}

fn parse_charge(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Parse the hotels/hospitals dataset
pub fn parse_hotels(text: &str) -> Result<ParsedDataset<Hotel>, DatasetError> {
    let (header, rows) = data_rows(text)?;
    let name_col = header.require("name")?;
    let type_col = header.require("type")?;
    let city_col = header.require("city")?;
    let phone_col = header.require("phone")?;
    let charge_col = header.require("roomCharge")?;

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    for (row_no, fields) in rows {
        let name = header.field(&fields, name_col);
        let city = header.field(&fields, city_col);
        if name.is_empty() || city.is_empty() {
            rejected.push((row_no, "missing name or city".to_string()));
            continue;
        }
        records.push(Hotel {
            name: name.to_string(),
            category: header.field(&fields, type_col).to_string(),
            city: city.to_string(),
            phone: header.field(&fields, phone_col).to_string(),
            room_charge: parse_charge(header.field(&fields, charge_col)),
        });
    }
    Ok(ParsedDataset { records, rejected })
}

/// Parse the bus routes dataset
pub fn parse_bus_routes(text: &str) -> Result<ParsedDataset<BusRoute>, DatasetError> {
    let (header, rows) = data_rows(text)?;
    let from_col = header.require("from")?;
    let to_col = header.require("to")?;
    let duration_col = header.require("duration")?;
    let fare_col = header.require("fare")?;

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    for (row_no, fields) in rows {
        let origin = header.field(&fields, from_col);
        let destination = header.field(&fields, to_col);
        if origin.is_empty() || destination.is_empty() {
            rejected.push((row_no, "missing origin or destination".to_string()));
            continue;
        }
        records.push(BusRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
            duration: header.field(&fields, duration_col).to_string(),
            fare: parse_charge(header.field(&fields, fare_col)),
        });
    }
    Ok(ParsedDataset { records, rejected })
}

/// Parse the attractions dataset
pub fn parse_attractions(text: &str) -> Result<ParsedDataset<Attraction>, DatasetError> {
    let (header, rows) = data_rows(text)?;
    let name_col = header.require("name")?;
    let city_col = header.require("city")?;
    let fee_col = header.require("entryFee")?;

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    for (row_no, fields) in rows {
        let name = header.field(&fields, name_col);
        let city = header.field(&fields, city_col);
        if name.is_empty() || city.is_empty() {
            rejected.push((row_no, "missing name or city".to_string()));
            continue;
        }
        records.push(Attraction {
            name: name.to_string(),
            city: city.to_string(),
            entry_fee: parse_charge(header.field(&fields, fee_col)),
        });
    }
    Ok(ParsedDataset { records, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOTELS_CSV: &str = "\
name,type,city,phone,roomCharge
Sangam Residency,Hotel,Tiruchirappalli,+91-431-100,1500
Apollo Care,Hospital,Tiruchirappalli,+91-431-200,
,Hotel,Chennai,+91-44-300,900
Marina Stay,Hotel,Chennai,+91-44-400,abc
";

    #[test]
    fn test_parse_hotels_with_rejections() {
        let parsed = parse_hotels(HOTELS_CSV).unwrap();
        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].0, 3);

        assert_eq!(parsed.records[0].room_charge, Some(1500));
        // Empty and unparsable charges degrade to None, not a rejection
        assert_eq!(parsed.records[1].room_charge, None);
        assert_eq!(parsed.records[2].room_charge, None);
    }

    #[test]
    fn test_missing_column_fails_whole_dataset() {
        let err = parse_hotels("name,city,phone\nA,B,C\n").unwrap_err();
        assert_eq!(
            err,
            DatasetError::MissingColumn {
                column: "type".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_bus_routes("  \n ").unwrap_err(), DatasetError::EmptyInput);
    }

    #[test]
    fn test_parse_bus_routes() {
        let csv = "from,to,duration,fare\nTrichy,Chennai,6h,450\nChennai,Ooty,9h,700\n";
        let parsed = parse_bus_routes(csv).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].origin, "Trichy");
        assert_eq!(parsed.records[0].fare, Some(450));
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_attractions_short_row() {
        let csv = "name,city,entryFee\nRock Fort,Tiruchirappalli,50\nMarina Beach,Chennai\n";
        let parsed = parse_attractions(csv).unwrap();
        // The short row still has name and city; the missing fee becomes None
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].entry_fee, None);
    }
}
