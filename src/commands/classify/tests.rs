//! Tests for the classify command report.

use super::*;

const DIFF: &str = r#"diff --git a/Lang-1.log b/Lang-1.log
index 1111111..2222222 100644
--- a/Lang-1.log
+++ b/Lang-1.log
@@ -3 +3 @@
-	at org.apache.Foo.bar(Foo.java:41)
+	at org.apache.Foo.bar(Foo.java:43)
@@ -10,2 +10,1 @@ Tests run: 12
-## testParse ##
-expected:<1>
+ok
@@ -20 +20 @@
-assertEquals(x, y)
+assertSame(x, y)
diff --git a/Lang-2.log b/Lang-2.log
new file mode 100644
index 0000000..3333333
--- /dev/null
+++ b/Lang-2.log
@@ -0,0 +1 @@
+fresh
"#;

fn options(classes: Vec<HunkClass>) -> ClassifyOptions {
    ClassifyOptions {
        classes,
        max_lines: 20,
        json: false,
    }
}

fn run(text: &str, opts: &ClassifyOptions) -> (String, BTreeMap<&'static str, usize>) {
    let mut reporter = Reporter::new(Vec::new(), Palette::plain());
    let counts = classify_report(text, opts, &mut reporter).unwrap();
    (String::from_utf8(reporter.into_inner()).unwrap(), counts)
}

#[test]
fn reports_only_other_hunks_by_default() {
    let (text, counts) = run(DIFF, &options(vec![HunkClass::Other]));

    assert_eq!(counts["LINE_NUMS_ONLY"], 1);
    assert_eq!(counts["FAILING_TEST_HEADER"], 1);
    assert_eq!(counts["OTHER"], 1);

    assert!(text.contains("Diff from files: a/Lang-1.log b/Lang-1.log"));
    assert!(text.contains(">>> Hunk 2: @@ -20 +20 @@"));
    assert!(text.contains("+assertSame(x, y)"));
    assert!(!text.contains(">>> Hunk 0:"));
    assert!(!text.contains(">>> Hunk 1:"));

    // The added file is summarized but not classified.
    assert!(text.contains("Diff from files: a/Lang-2.log b/Lang-2.log"));
    assert!(text.contains("    Status added"));
    assert!(!text.contains("+fresh"));
}

#[test]
fn selected_classes_are_reported() {
    let (text, _) = run(
        DIFF,
        &options(vec![HunkClass::LineNumsOnly, HunkClass::FailingTestHeader]),
    );
    assert!(text.contains(">>> Hunk 0: @@ -3 +3 @@"));
    assert!(text.contains(">>> Hunk 1: @@ -10,2 +10,1 @@"));
    assert!(!text.contains(">>> Hunk 2:"));
}

#[test]
fn files_without_selected_hunks_are_skipped() {
    let diff = "diff --git a/x b/x\nindex 1..2\n--- a/x\n+++ b/x\n@@ -1 +1 @@\n-line 1\n+line 2\n";
    let (text, counts) = run(diff, &options(vec![HunkClass::Other]));
    assert!(text.is_empty());
    assert_eq!(counts["LINE_NUMS_ONLY"], 1);
}

#[test]
fn json_output_includes_classes() {
    let opts = ClassifyOptions {
        json: true,
        ..options(vec![HunkClass::Other])
    };
    let (text, _) = run(DIFF, &opts);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["status"], "modified");
    assert_eq!(files[0]["hunks"][0]["class"], "line_nums_only");
    assert_eq!(files[0]["hunks"][1]["class"], "failing_test_header");
    assert_eq!(files[0]["hunks"][2]["header"], "@@ -20 +20 @@");
    assert_eq!(files[1]["status"], "added");
    assert!(files[1]["hunks"][0]["class"].is_null());
}

#[test]
fn malformed_diff_is_an_error() {
    let mut reporter = Reporter::new(Vec::new(), Palette::plain());
    let err = classify_report("garbage\n", &options(vec![HunkClass::Other]), &mut reporter)
        .unwrap_err();
    assert!(matches!(err, MutdiffError::UnrecognizedLine { line_no: 1, .. }));
}

#[test]
fn empty_hunk_in_modified_file_is_an_error() {
    let diff = "diff --git a/x b/x\nindex 1..2\n--- a/x\n+++ b/x\n@@ -1 +1 @@\n same\n";
    let mut reporter = Reporter::new(Vec::new(), Palette::plain());
    let err = classify_report(diff, &options(vec![HunkClass::Other]), &mut reporter).unwrap_err();
    assert!(matches!(err, MutdiffError::EmptyHunk { .. }));
}

#[test]
fn options_from_args_and_config() {
    let config = Config {
        max_body_lines: 7,
        ..Config::default()
    };
    let args = ClassifyArgs {
        file: None,
        all: true,
        max_lines: None,
        json: false,
    };
    let opts = ClassifyOptions::from_args(&args, &config);
    assert_eq!(opts.classes.len(), 3);
    assert_eq!(opts.max_lines, 7);

    let args = ClassifyArgs {
        file: None,
        all: false,
        max_lines: Some(2),
        json: false,
    };
    let opts = ClassifyOptions::from_args(&args, &config);
    assert_eq!(opts.classes, vec![HunkClass::Other]);
    assert_eq!(opts.max_lines, 2);
}
