//! Reusable test content

/// Minimal contract body; apigen never parses it
pub const CONTRACT: &str = "openapi: 3.0.3\ninfo:\n  title: test\n  version: 1.0.0\npaths: {}\n";

/// Shell stand-in for `openapi-generator-cli`.
///
/// Creates `<out>/src/main/java/Generated.java`, appends the input path to
/// `generator.log` next to the script and fails for inputs containing
/// `broken`.
pub const FAKE_GENERATOR: &str = r#"#!/bin/sh
out=""
in=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    -i) in="$2"; shift 2 ;;
    *) shift ;;
  esac
done
case "$in" in
  *broken*) echo "cannot parse $in" >&2; exit 3 ;;
esac
mkdir -p "$out/src/main/java"
echo "class Generated {}" > "$out/src/main/java/Generated.java"
echo "$in" >> "$(dirname "$0")/generator.log"
"#;
