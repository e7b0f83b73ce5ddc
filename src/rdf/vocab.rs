//! Well-known vocabulary IRIs

/// [XML Schema datatypes](http://www.w3.org/2001/XMLSchema#)
pub mod xsd {
    /// xsd:string
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// xsd:double
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// xsd:hexBinary
    pub const HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
    /// xsd:decimal
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// xsd:integer
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// xsd:boolean
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// xsd:date
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// xsd:time
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
    /// xsd:dateTime
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}
