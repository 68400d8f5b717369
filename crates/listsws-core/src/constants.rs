/// Lists web service SOAP namespace.
pub const LISTS_NS: &str = "http://schemas.microsoft.com/sharepoint/soap/";

/// Rowset schema namespace used for `z:row` elements.
pub const ROWSET_ROW_NS: &str = "#RowsetSchema";

/// Rowset data namespace used for `rs:data` elements.
pub const ROWSET_DATA_NS: &str = "urn:schemas-microsoft-com:rowset";

/// SOAP 1.1 envelope namespace.
pub const SOAP11_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP 1.2 envelope namespace.
pub const SOAP12_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Error code reported for a batch command that succeeded.
pub const SUCCESS_ERROR_CODE: &str = "0x00000000";

/// Prefix the server puts in front of every field name in a returned row.
pub const COLUMN_PREFIX: &str = "ows_";

/// Reserved field identifying a list item.
pub const ID_FIELD: &str = "ID";
pub const ID_COLUMN: &str = const_str::concat!(COLUMN_PREFIX, ID_FIELD);

/// Default service path relative to the site URL.
pub const DEFAULT_LISTS_PATH: &str = "/_vti_bin/lists.asmx";
