//! The SQL type correspondence table
//!
//! Row columns are ordered C#, Java, TypeScript, Python.

use super::{LanguageType, Nullability};

/// Canonical SQL type tokens covered by the table
pub const SQL_TYPES: [&str; 21] = [
    "INT",
    "BIGINT",
    "SMALLINT",
    "TINYINT",
    "BIT",
    "DECIMAL",
    "NUMERIC",
    "MONEY",
    "FLOAT",
    "REAL",
    "DATE",
    "DATETIME",
    "DATETIME2",
    "DATETIMEOFFSET",
    "TIME",
    "CHAR",
    "VARCHAR",
    "NVARCHAR",
    "TEXT",
    "UNIQUEIDENTIFIER",
    "VARBINARY",
];

const fn cs_value(name: &'static str, import: Option<&'static str>) -> LanguageType {
    LanguageType {
        name,
        nullability: Nullability::Suffix,
        import,
    }
}

const fn cs_ref(name: &'static str) -> LanguageType {
    LanguageType {
        name,
        nullability: Nullability::Unchanged,
        import: None,
    }
}

const fn java_prim(name: &'static str, boxed: &'static str) -> LanguageType {
    LanguageType {
        name,
        nullability: Nullability::Boxed(boxed),
        import: None,
    }
}

const fn java_ref(name: &'static str, import: Option<&'static str>) -> LanguageType {
    LanguageType {
        name,
        nullability: Nullability::Unchanged,
        import,
    }
}

const fn ts(name: &'static str) -> LanguageType {
    LanguageType {
        name,
        nullability: Nullability::FieldMarker,
        import: None,
    }
}

const fn py(name: &'static str, import: Option<&'static str>) -> LanguageType {
    LanguageType {
        name,
        nullability: Nullability::OptionalGeneric,
        import,
    }
}

const SYSTEM: Option<&str> = Some("System");
const BIG_DECIMAL: Option<&str> = Some("java.math.BigDecimal");
const PY_DECIMAL: Option<&str> = Some("decimal.Decimal");

pub(super) static TYPE_ROWS: [(&str, [LanguageType; 4]); 21] = [
    (
        "INT",
        [cs_value("int", None), java_prim("int", "Integer"), ts("number"), py("int", None)],
    ),
    (
        "BIGINT",
        [cs_value("long", None), java_prim("long", "Long"), ts("number"), py("int", None)],
    ),
    (
        "SMALLINT",
        [cs_value("short", None), java_prim("short", "Short"), ts("number"), py("int", None)],
    ),
    (
        "TINYINT",
        [cs_value("byte", None), java_prim("short", "Short"), ts("number"), py("int", None)],
    ),
    (
        "BIT",
        [cs_value("bool", None), java_prim("boolean", "Boolean"), ts("boolean"), py("bool", None)],
    ),
    (
        "DECIMAL",
        [cs_value("decimal", None), java_ref("BigDecimal", BIG_DECIMAL), ts("number"), py("Decimal", PY_DECIMAL)],
    ),
    (
        "NUMERIC",
        [cs_value("decimal", None), java_ref("BigDecimal", BIG_DECIMAL), ts("number"), py("Decimal", PY_DECIMAL)],
    ),
    (
        "MONEY",
        [cs_value("decimal", None), java_ref("BigDecimal", BIG_DECIMAL), ts("number"), py("Decimal", PY_DECIMAL)],
    ),
    (
        "FLOAT",
        [cs_value("double", None), java_prim("double", "Double"), ts("number"), py("float", None)],
    ),
    (
        "REAL",
        [cs_value("float", None), java_prim("float", "Float"), ts("number"), py("float", None)],
    ),
    (
        "DATE",
        [
            cs_value("DateTime", SYSTEM),
            java_ref("LocalDate", Some("java.time.LocalDate")),
            ts("Date"),
            py("date", Some("datetime.date")),
        ],
    ),
    (
        "DATETIME",
        [
            cs_value("DateTime", SYSTEM),
            java_ref("LocalDateTime", Some("java.time.LocalDateTime")),
            ts("Date"),
            py("datetime", Some("datetime.datetime")),
        ],
    ),
    (
        "DATETIME2",
        [
            cs_value("DateTime", SYSTEM),
            java_ref("LocalDateTime", Some("java.time.LocalDateTime")),
            ts("Date"),
            py("datetime", Some("datetime.datetime")),
        ],
    ),
    (
        "DATETIMEOFFSET",
        [
            cs_value("DateTimeOffset", SYSTEM),
            java_ref("OffsetDateTime", Some("java.time.OffsetDateTime")),
            ts("Date"),
            py("datetime", Some("datetime.datetime")),
        ],
    ),
    (
        "TIME",
        [
            cs_value("TimeSpan", SYSTEM),
            java_ref("LocalTime", Some("java.time.LocalTime")),
            ts("string"),
            py("time", Some("datetime.time")),
        ],
    ),
    (
        "CHAR",
        [cs_ref("string"), java_ref("String", None), ts("string"), py("str", None)],
    ),
    (
        "VARCHAR",
        [cs_ref("string"), java_ref("String", None), ts("string"), py("str", None)],
    ),
    (
        "NVARCHAR",
        [cs_ref("string"), java_ref("String", None), ts("string"), py("str", None)],
    ),
    (
        "TEXT",
        [cs_ref("string"), java_ref("String", None), ts("string"), py("str", None)],
    ),
    (
        "UNIQUEIDENTIFIER",
        [
            cs_value("Guid", SYSTEM),
            java_ref("UUID", Some("java.util.UUID")),
            ts("string"),
            py("UUID", Some("uuid.UUID")),
        ],
    ),
    (
        "VARBINARY",
        [cs_ref("byte[]"), java_ref("byte[]", None), ts("Uint8Array"), py("bytes", None)],
    ),
];

pub(super) static CSHARP_FALLBACK: LanguageType = cs_ref("object");
pub(super) static JAVA_FALLBACK: LanguageType = java_ref("Object", None);
pub(super) static TYPESCRIPT_FALLBACK: LanguageType = ts("any");
pub(super) static PYTHON_FALLBACK: LanguageType = py("Any", Some("typing.Any"));
