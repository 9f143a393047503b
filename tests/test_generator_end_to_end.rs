//! End-to-end tests for the generation pipeline: tagged SQL documents in,
//! rendered artifacts and diagnostics out.

use hardcoded::report::codes;
use hardcoded::{Document, Severity, generate};

#[test]
fn test_single_query_document() {
    let docs = vec![Document::new(
        "TestQueries.sql",
        "-- @hardcoded\n\
         -- @namespace Hardcoded.NET.Test\n\
         -- @class TestQueries\n\
         -- @name TestQuery1\n\
         -- Test comment\n\
         SELECT * FROM [dbo].[Test] WHERE [Id] = 1\n",
    )];

    let output = generate(&docs);

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.artifacts.len(), 1);

    let artifact = &output.artifacts[0];
    assert_eq!(artifact.name, "Hardcoded.NET.Test.TestQueries.g.cs");
    assert_eq!(
        artifact.text,
        "namespace Hardcoded.NET.Test;\n\
         \n\
         internal static partial class TestQueries\n\
         {\n\
         \x20   /// <summary>\n\
         \x20   /// Test comment\n\
         \x20   /// </summary>\n\
         \x20   internal const string TestQuery1 = @\"SELECT * FROM [dbo].[Test] WHERE [Id] = 1\";\n\
         \n\
         }\n"
    );
}

#[test]
fn test_multiline_body_survives_verbatim() {
    let docs = vec![Document::new(
        "TestQueries.sql",
        "-- @hardcoded\n\
         -- @namespace Hardcoded.NET.Test\n\
         -- @class TestQueries\n\
         -- @name TestQuery1\n\
         -- Test comment\n\
         SELECT *\n\
         FROM [dbo].[Test]\n\
         WHERE [Id] = 1\n",
    )];

    let output = generate(&docs);

    assert_eq!(output.artifacts.len(), 1);
    assert!(output.artifacts[0].text.contains(
        "    internal const string TestQuery1 = @\"SELECT *\n\
         FROM [dbo].[Test]\n\
         WHERE [Id] = 1\";\n"
    ));
}

#[test]
fn test_reserved_word_class_name_warns_and_skips() {
    let docs = vec![Document::new(
        "InvalidQueries.sql",
        "-- @hardcoded\n\
         -- @namespace Hardcoded.NET.Test\n\
         -- @class class\n\
         -- @name int\n\
         SELECT 1\n",
    )];

    let output = generate(&docs);

    assert!(output.artifacts.is_empty());
    assert_eq!(output.diagnostics.len(), 1);

    let diag = &output.diagnostics[0];
    assert_eq!(diag.code, codes::INVALID_CLASS_NAME);
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.message.contains("'class'"));
    assert!(diag.message.contains("'InvalidQueries.sql'"));
}

#[test]
fn test_unmarked_document_is_silent() {
    let docs = vec![Document::new(
        "Plain.sql",
        "-- @namespace Hardcoded.NET.Test\n\
         -- @class TestQueries\n\
         -- @name TestQuery1\n\
         SELECT 1\n",
    )];

    let output = generate(&docs);

    assert!(output.artifacts.is_empty());
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_quote_doubling_in_artifact() {
    let docs = vec![Document::new(
        "Quotes.sql",
        "-- @hardcoded\n\
         -- @namespace Ns\n\
         -- @class C\n\
         -- @name Q\n\
         SELECT * FROM t WHERE name = \"admin\"\n",
    )];

    let output = generate(&docs);

    let text = &output.artifacts[0].text;
    assert!(text.contains("@\"SELECT * FROM t WHERE name = \"\"admin\"\"\";"));
    // The doubled quotes are the only ones inside the literal.
    let literal_start = text.find("@\"").unwrap() + 2;
    let literal_end = text.rfind("\";").unwrap();
    let literal = &text[literal_start..literal_end];
    assert_eq!(literal.matches('"').count(), 4);
}

#[test]
fn test_last_write_wins_end_to_end() {
    let docs = vec![Document::new(
        "Dup.sql",
        "-- @hardcoded\n\
         -- @namespace Ns\n\
         -- @class C\n\
         -- @name X\n\
         -- first\n\
         SELECT 1\n\
         -- @name X\n\
         -- second\n\
         SELECT 2\n",
    )];

    let output = generate(&docs);

    assert_eq!(output.artifacts.len(), 1);
    let text = &output.artifacts[0].text;
    assert_eq!(text.matches("const string X").count(), 1);
    assert!(text.contains("/// second"));
    assert!(text.contains("@\"SELECT 2\";"));
    assert!(!text.contains("SELECT 1"));
}

#[test]
fn test_invalid_query_name_spares_siblings() {
    let docs = vec![Document::new(
        "Mixed.sql",
        "-- @hardcoded\n\
         -- @namespace Ns\n\
         -- @class C\n\
         -- @name 1bad\n\
         SELECT 1\n\
         -- @name Good\n\
         SELECT 2\n",
    )];

    let output = generate(&docs);

    assert_eq!(output.artifacts.len(), 1);
    assert!(output.artifacts[0].text.contains("const string Good"));
    assert!(!output.artifacts[0].text.contains("SELECT 1"));

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, codes::INVALID_QUERY_NAME);
    assert!(output.diagnostics[0].message.contains("'1bad'"));
}

#[test]
fn test_missing_summary_gets_fallback_doc() {
    let docs = vec![Document::new(
        "reports.sql",
        "-- @hardcoded\n\
         -- @namespace Ns\n\
         -- @class C\n\
         -- @name Q\n\
         SELECT 1\n",
    )];

    let output = generate(&docs);

    assert!(output.artifacts[0].text.contains("/// Query from reports.sql"));
}

#[test]
fn test_two_documents_emit_independently() {
    let text_a = "-- @hardcoded\n-- @namespace NsA\n-- @class A\n-- @name QA\nSELECT 1\n";
    let text_b = "-- @hardcoded\n-- @namespace NsB\n-- @class B\n-- @name QB\nSELECT 2\n";
    let docs = vec![
        Document::new("b.sql", text_b),
        Document::new("a.sql", text_a),
    ];

    let output = generate(&docs);

    // Emission order follows source-path order.
    let names: Vec<_> = output.artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["NsA.A.g.cs", "NsB.B.g.cs"]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_artifact_names_unique_per_batch() {
    let docs = vec![Document::new(
        "multi.sql",
        "-- @hardcoded\n\
         -- @namespace Ns\n\
         -- @class First\n\
         -- @name Q\n\
         SELECT 1\n\
         -- @class Second\n\
         -- @name Q\n\
         SELECT 2\n",
    )];

    let output = generate(&docs);

    let mut names: Vec<_> = output.artifacts.iter().map(|a| a.name.clone()).collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
    assert_eq!(total, 2);
}
