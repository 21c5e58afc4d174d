use super::PipelineError;
use std::path::Path;

const SCORE_SUFFIX: &str = "_score";

/// Name of the appended score column: the override when given, otherwise the
/// config file's stem lower-cased with every character outside `[a-z0-9_]`
/// replaced by `_`, followed by `_score`.
pub fn result_column_name(column_override: Option<&str>, config_path: &Path) -> String {
    if let Some(name) = column_override.filter(|name| !name.is_empty()) {
        return name.to_string();
    }

    let stem = config_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let sanitized: String = stem
        .chars()
        .map(|ch| match ch {
            'a'..='z' | '0'..='9' | '_' => ch,
            _ => '_',
        })
        .collect();

    format!("{sanitized}{SCORE_SUFFIX}")
}

/// Input header with `column` appended; fails when the header already has it.
/// Existing names are copied byte-for-byte.
pub fn output_header(
    header: &csv::ByteRecord,
    column: &str,
) -> Result<csv::ByteRecord, PipelineError> {
    if header.iter().any(|existing| existing == column.as_bytes()) {
        return Err(PipelineError::HeaderConflict(column.to_string()));
    }

    let mut out = header.clone();
    out.push_field(column.as_bytes());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_name_from_config_filename() {
        assert_eq!(
            result_column_name(None, Path::new("config/Legacy-Config.YAML")),
            "legacy_config_score"
        );
        assert_eq!(
            result_column_name(None, Path::new("criticality pike.v2.yml")),
            "criticality_pike_v2_score"
        );
    }

    #[test]
    fn override_wins_verbatim() {
        assert_eq!(
            result_column_name(Some("Criticality Score"), Path::new("pike.yaml")),
            "Criticality Score"
        );
        assert_eq!(
            result_column_name(Some(""), Path::new("pike.yaml")),
            "pike_score"
        );
    }

    #[test]
    fn appends_column_to_header() {
        let header = csv::ByteRecord::from(vec!["repo.url", "legacy.created_since"]);
        let out = output_header(&header, "pike_score").expect("no conflict");
        assert_eq!(
            out,
            csv::ByteRecord::from(vec!["repo.url", "legacy.created_since", "pike_score"])
        );
    }

    #[test]
    fn rejects_existing_column() {
        let header = csv::ByteRecord::from(vec!["repo.url", "pike_score"]);
        match output_header(&header, "pike_score") {
            Err(PipelineError::HeaderConflict(column)) => assert_eq!(column, "pike_score"),
            other => panic!("expected header conflict, got {other:?}"),
        }
    }
}
