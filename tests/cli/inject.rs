use anyhow::Result;

use crate::CliTest;

const APP_TSX: &str = "\
import { Box, Button } from '@chakra-ui/react';

export function App() {
  return (
    <Box className=\"app-shell\">
      <Button>Go</Button>
    </Box>
  );
}
";

#[test]
fn test_missing_argument_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was:\n{}", stderr);
    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("nope.tsx").output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to read file"),
        "stderr was:\n{}",
        stderr
    );
    Ok(())
}

#[test]
fn test_parse_error_fails_without_output() -> Result<()> {
    let test = CliTest::with_file("broken.tsx", "function broken() {")?;

    let output = test.command().arg("broken.tsx").output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse"),
        "stderr was:\n{}",
        stderr
    );
    assert!(
        !test.root().join("broken_with_testids.tsx").exists(),
        "no output file may exist after a parse failure"
    );
    Ok(())
}

#[test]
fn test_successful_run_writes_sibling_file() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP_TSX)?;

    let output = test.command().arg("src/App.tsx").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Added 2 data-testid attributes"),
        "stdout was:\n{}",
        stdout
    );
    assert!(stdout.contains("Detected Chakra UI components: Box, Button"));

    let rewritten = test.read_file("src/App_with_testids.tsx")?;
    assert!(rewritten.contains("<Box className=\"app-shell\" data-testid='box-app-shell-1'>"));
    assert!(rewritten.contains("<Button data-testid='button-1'>Go</Button>"));
    Ok(())
}

#[test]
fn test_input_file_is_never_overwritten() -> Result<()> {
    let test = CliTest::with_file("App.tsx", APP_TSX)?;

    let output = test.command().arg("App.tsx").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("App.tsx")?, APP_TSX);
    Ok(())
}

#[test]
fn test_second_run_on_output_adds_nothing() -> Result<()> {
    let test = CliTest::with_file("App.tsx", APP_TSX)?;

    let first = test.command().arg("App.tsx").output()?;
    assert!(first.status.success());
    let first_output = test.read_file("App_with_testids.tsx")?;

    let second = test.command().arg("App_with_testids.tsx").output()?;
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(
        stdout.contains("Added 0 data-testid attributes"),
        "stdout was:\n{}",
        stdout
    );
    assert_eq!(
        test.read_file("App_with_testids_with_testids.tsx")?,
        first_output
    );
    Ok(())
}

#[test]
fn test_fallback_note_for_unclassified_imports() -> Result<()> {
    let source = "\
import { Box } from 'ui-kit';

export const El = () => <Box>x</Box>;
";
    let test = CliTest::with_file("Page.tsx", source)?;

    let output = test.command().arg("Page.tsx").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No Chakra UI imports found, using default component list."));

    let rewritten = test.read_file("Page_with_testids.tsx")?;
    assert!(rewritten.contains("<Box data-testid='box-1'>x</Box>"));
    Ok(())
}
