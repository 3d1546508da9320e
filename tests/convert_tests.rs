//! Conversion pipeline tests

use ddl_codegen::convert::{
    ConversionError, ConversionRequest, ConversionResponse, SchemaConverter, convert,
};

mod scenario_tests {
    use super::*;

    #[test]
    fn test_multi_table_python() {
        let sql = "CREATE TABLE Foo (Id INT NOT NULL); CREATE TABLE Bar (Name NVARCHAR(50));";
        let result = convert(sql, "python").unwrap();

        let keys: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Bar", "Foo"]);

        assert!(result["Foo"].contains("    Id: int\n"));
        assert!(!result["Foo"].contains("Optional"));
        assert!(result["Bar"].contains("    Name: Optional[str]\n"));
        assert!(result["Bar"].contains("from typing import Optional\n"));
    }

    #[test]
    fn test_empty_input_is_validation_error() {
        assert!(matches!(
            convert("", "csharp"),
            Err(ConversionError::Validation(_))
        ));
        assert!(matches!(
            convert("   \n\t  ", "csharp"),
            Err(ConversionError::Validation(_))
        ));
    }

    #[test]
    fn test_select_only_is_no_tables_found() {
        assert_eq!(
            convert("SELECT 1;", "csharp"),
            Err(ConversionError::NoTablesFound)
        );
    }

    #[test]
    fn test_unsupported_language() {
        let result = convert("CREATE TABLE Foo (Id INT NOT NULL);", "rust");
        assert_eq!(
            result,
            Err(ConversionError::UnsupportedLanguage("rust".to_string()))
        );
    }

    #[test]
    fn test_language_is_case_insensitive() {
        let sql = "CREATE TABLE Foo (Id INT NOT NULL);";
        assert_eq!(convert(sql, "TypeScript"), convert(sql, "typescript"));
        assert!(convert(sql, "JAVA").is_ok());
    }

    #[test]
    fn test_integer_synonym_maps_like_int() {
        let result = convert("CREATE TABLE T (a INTEGER NOT NULL, b DOUBLE PRECISION);", "java").unwrap();

        assert!(result["T"].contains("    private int a;\n"));
        assert!(result["T"].contains("    public int getA() {\n"));
        assert!(result["T"].contains("    private Double b;\n"));
        assert!(!result["T"].contains("Object"));
    }

    #[test]
    fn test_ssms_script_with_go_separators() {
        let sql = "CREATE TABLE [dbo].[Foo] ([Id] [int] NOT NULL)\r\nGO\r\n";
        let result = convert(sql, "csharp").unwrap();

        assert!(result["Foo"].contains("public int Id { get; set; }"));
    }

    #[test]
    fn test_csharp_column_named_like_table() {
        let sql = "CREATE TABLE Status (Id INT NOT NULL, Status NVARCHAR(20));";
        let result = convert(sql, "csharp").unwrap();

        assert!(result["Status"].contains("public class Status\n"));
        assert!(result["Status"].contains("    public string StatusValue { get; set; }\n"));
    }

    #[test]
    fn test_typescript_keyword_table_name() {
        let result = convert("CREATE TABLE [default] (Id INT NOT NULL);", "typescript").unwrap();
        assert_eq!(result["default"], "export interface default_ {\n  Id: number;\n}\n");
    }

    #[test]
    fn test_parse_error() {
        let result = convert("CREATE TABLE Foo (Id INT NOT NULL", "csharp");
        match result {
            Err(ConversionError::Parse(diagnostics)) => assert!(!diagnostics.is_empty()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}

mod property_tests {
    use super::*;

    const SCRIPT: &str = r#"
        CREATE TABLE dbo.Customers (
            CustomerId UNIQUEIDENTIFIER NOT NULL,
            Email NVARCHAR(320) NOT NULL,
            DisplayName NVARCHAR(100),
            Balance MONEY,
            CreatedAt DATETIME2(7) NOT NULL,
            Avatar VARBINARY(256)
        );
        CREATE TABLE dbo.Orders (
            OrderId BIGINT NOT NULL,
            CustomerId UNIQUEIDENTIFIER NOT NULL,
            Total DECIMAL(18, 2) NOT NULL,
            ShippedOn DATE
        );
    "#;

    #[test]
    fn test_output_is_deterministic() {
        for language in ["csharp", "java", "typescript", "python"] {
            let first = convert(SCRIPT, language).unwrap();
            let second = convert(SCRIPT, language).unwrap();
            assert_eq!(first, second, "non-deterministic output for {}", language);
        }
    }

    #[test]
    fn test_column_order_is_preserved() {
        let result = convert(SCRIPT, "typescript").unwrap();
        let code = &result["Customers"];

        let positions: Vec<usize> = [
            "CustomerId",
            "Email",
            "DisplayName",
            "Balance",
            "CreatedAt",
            "Avatar",
        ]
        .iter()
        .map(|name| code.find(&format!("  {}", name)).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_nullability_propagates_to_every_language() {
        let csharp = convert(SCRIPT, "csharp").unwrap();
        assert!(csharp["Orders"].contains("public DateTime? ShippedOn { get; set; }"));
        assert!(csharp["Orders"].contains("public long OrderId { get; set; }"));
        assert!(csharp["Customers"].contains("public decimal? Balance { get; set; }"));

        let java = convert(SCRIPT, "java").unwrap();
        assert!(java["Orders"].contains("private long OrderId;"));
        assert!(java["Orders"].contains("private LocalDate ShippedOn;"));

        let typescript = convert(SCRIPT, "typescript").unwrap();
        assert!(typescript["Customers"].contains("  Email: string;\n"));
        assert!(typescript["Customers"].contains("  DisplayName?: string;\n"));

        let python = convert(SCRIPT, "python").unwrap();
        assert!(python["Customers"].contains("    CreatedAt: datetime\n"));
        assert!(python["Customers"].contains("    Avatar: Optional[bytes]\n"));
    }

    #[test]
    fn test_duplicate_table_names_keep_last_definition() {
        let sql = "CREATE TABLE Dup (A INT NOT NULL); CREATE TABLE other.Dup (B BIT NOT NULL);";
        let result = convert(sql, "typescript").unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result["Dup"], "export interface Dup {\n  B: boolean;\n}\n");
    }
}

mod request_tests {
    use super::*;

    #[test]
    fn test_successful_request() {
        let converter = SchemaConverter::new();
        let response = converter.convert_request(&ConversionRequest::new(
            "CREATE TABLE Foo (Id INT NOT NULL);",
            "java",
        ));

        assert!(response.success);
        assert!(response.error.is_none());
        assert!(response.generated_code["Foo"].contains("public class Foo {"));
    }

    #[test]
    fn test_failed_request_carries_message() {
        let converter = SchemaConverter::new();
        let response = converter.convert_request(&ConversionRequest::new("", "java"));

        assert_eq!(
            response,
            ConversionResponse {
                generated_code: Default::default(),
                success: false,
                error: Some("Validation error: SQL script cannot be empty".to_string()),
            }
        );
    }

    #[test]
    fn test_request_from_json_defaults_to_csharp() {
        let request: ConversionRequest =
            serde_json::from_str(r#"{"sqlScript": "CREATE TABLE Foo (Id INT NOT NULL);"}"#)
                .unwrap();
        let response = SchemaConverter::new().convert_request(&request);

        assert!(response.success);
        assert!(response.generated_code["Foo"].contains("public int Id { get; set; }"));
    }
}
