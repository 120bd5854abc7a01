//! Parsed header metadata: dimensions, attributes and variables.

use super::format::{Format, STREAMING};

/// A dimension definition.
///
/// Dimensions are identified positionally: a dimension's index in
/// [`Header::dimensions`] is its ID, and that is what variables reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    /// Dimension name.
    pub name: String,
    /// Declared length; zero marks the record (unlimited) dimension.
    pub length: u32,
}

impl Dimension {
    /// True for the record (unlimited) dimension.
    #[must_use]
    pub fn is_record(&self) -> bool {
        self.length == 0
    }
}

/// An attribute: a named, typed, opaque byte payload.
///
/// The type code and value bytes are stored verbatim; decoding the bytes
/// into typed values belongs to a later layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Numeric element type code, uninterpreted here.
    pub type_code: u32,
    /// Raw value payload, exactly as stored in the file.
    pub values: Vec<u8>,
}

/// A variable descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Variable name.
    pub name: String,
    /// Dimension IDs, in declaration order. Each indexes
    /// [`Header::dimensions`] of the same parse; range checking is left to
    /// the consumer.
    pub dim_ids: Vec<u32>,
    /// Attributes owned by this variable.
    pub attributes: Vec<Attribute>,
    /// Numeric element type code, uninterpreted here.
    pub type_code: u32,
    /// Per-record byte size of the variable's data.
    pub vsize: u32,
    /// Absolute byte offset of the variable's data block.
    pub offset: u64,
}

impl Variable {
    /// Number of dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dim_ids.len()
    }

    /// Look up one of this variable's attributes by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// A fully parsed NetCDF classic header.
///
/// Built once per parse and never mutated afterward. All nested sequences
/// preserve file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Format variant from the version byte.
    pub format: Format,
    /// Record count, stored raw ([`STREAMING`] means unknown/streaming).
    pub num_recs: u32,
    /// Dimension definitions, in file order.
    pub dimensions: Vec<Dimension>,
    /// Global attributes, in file order.
    pub attributes: Vec<Attribute>,
    /// Variable descriptors, in file order.
    pub variables: Vec<Variable>,
}

impl Header {
    /// True when the record count carries the streaming sentinel.
    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.num_recs == STREAMING
    }

    /// Look up a dimension by name.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dim| dim.name == name)
    }

    /// Look up a global attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Look up a variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|var| var.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> Header {
        Header {
            format: Format::Classic,
            num_recs: 12,
            dimensions: vec![
                Dimension {
                    name: "time".to_string(),
                    length: 0,
                },
                Dimension {
                    name: "lat".to_string(),
                    length: 180,
                },
            ],
            attributes: vec![Attribute {
                name: "title".to_string(),
                type_code: 2,
                values: b"test".to_vec(),
            }],
            variables: vec![Variable {
                name: "temp".to_string(),
                dim_ids: vec![0, 1],
                attributes: vec![Attribute {
                    name: "units".to_string(),
                    type_code: 2,
                    values: b"K".to_vec(),
                }],
                type_code: 5,
                vsize: 720,
                offset: 1024,
            }],
        }
    }

    #[test]
    fn test_record_dimension() {
        let header = sample_header();
        assert!(header.dimensions[0].is_record());
        assert!(!header.dimensions[1].is_record());
    }

    #[test]
    fn test_lookups() {
        let header = sample_header();
        assert_eq!(header.dimension("lat").map(|d| d.length), Some(180));
        assert!(header.dimension("lon").is_none());
        assert_eq!(header.attribute("title").map(|a| a.type_code), Some(2));
        let var = header.variable("temp").expect("temp variable");
        assert_eq!(var.rank(), 2);
        assert_eq!(var.attribute("units").map(|a| &a.values[..]), Some(&b"K"[..]));
        assert!(var.attribute("scale_factor").is_none());
    }

    #[test]
    fn test_streaming_sentinel() {
        let mut header = sample_header();
        assert!(!header.is_streaming());
        header.num_recs = STREAMING;
        assert!(header.is_streaming());
    }
}
