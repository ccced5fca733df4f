use rayon::prelude::*;

use crate::{
    dedup, diagnostics::Diagnostics, document::Document, naming::NamingRule,
    traversal::NodeFilter, Error, Result, Token,
};

/// Extracts every token of kind `T` from `documents`.
///
/// Documents are processed in parallel. Their results are concatenated in
/// input order, de-duplicated across documents, and only then renamed with
/// `naming`: two tokens whose names only become equal after renaming are
/// both kept. The first failing document aborts the whole batch.
pub fn extract<T: Token>(
    documents: &[Document],
    filter: &NodeFilter,
    naming: &NamingRule,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<T>> {
    if documents.is_empty() {
        return Err(Error::NoDocuments);
    }
    diagnostics.info(format!("Start {} extraction", T::KIND));

    let per_document = documents
        .par_iter()
        .map(|document| T::extract(document, filter, diagnostics))
        .collect::<Result<Vec<_>>>()?;

    let tokens = dedup(per_document.into_iter().flatten());
    diagnostics.info(format!("Found {} {}", tokens.len(), T::KIND));

    let tokens = tokens
        .into_iter()
        .map(|mut token| {
            let name = naming.process(token.name());
            token.set_name(name);
            token
        })
        .collect();

    diagnostics.success(format!("Complete {} extraction", T::KIND));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingDiagnostics, Level};
    use crate::naming::NameStyle;
    use crate::test_support::*;
    use crate::{Color, Spacing};

    #[test]
    fn test_no_documents() {
        let result = extract::<Color>(
            &[],
            &NodeFilter::default(),
            &NamingRule::default(),
            &CollectingDiagnostics::new(),
        );
        assert!(matches!(result, Err(Error::NoDocuments)));
    }

    #[test]
    fn test_merges_documents_in_order() {
        let first = document(
            vec![
                rectangle("1:1", "a", Some("S:1"), vec![solid(1.0, 0.0, 0.0, 1.0)]),
                rectangle("1:2", "b", Some("S:2"), vec![solid(0.0, 1.0, 0.0, 1.0)]),
            ],
            vec![fill_style("S:1", "Red"), fill_style("S:2", "Green")],
        );
        let second = document(
            vec![
                rectangle("1:1", "a", Some("S:3"), vec![solid(0.0, 0.0, 1.0, 1.0)]),
                rectangle("1:2", "b", Some("S:1"), vec![solid(1.0, 0.0, 0.0, 1.0)]),
            ],
            vec![fill_style("S:1", "Red"), fill_style("S:3", "Blue")],
        );
        let diagnostics = CollectingDiagnostics::new();
        let colors = extract::<Color>(
            &[first, second],
            &NodeFilter::default(),
            &NamingRule::with_style(NameStyle::SnakeCase),
            &diagnostics,
        )
        .unwrap();
        let names: Vec<_> = colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["red", "green", "blue"]);
        assert_eq!(
            diagnostics.messages(Level::Info),
            ["Start colors extraction", "Found 3 colors"]
        );
        assert_eq!(
            diagnostics.messages(Level::Success),
            ["Complete colors extraction"]
        );
    }

    #[test]
    fn test_renaming_after_dedup_keeps_both() {
        let doc = document(
            vec![
                rectangle("1:1", "a", Some("S:1"), vec![solid(1.0, 0.0, 0.0, 1.0)]),
                rectangle("1:2", "b", Some("S:2"), vec![solid(1.0, 0.0, 0.0, 1.0)]),
            ],
            vec![fill_style("S:1", "Brand Red"), fill_style("S:2", "brand_red")],
        );
        let colors = extract::<Color>(
            &[doc],
            &NodeFilter::default(),
            &NamingRule::with_style(NameStyle::SnakeCase),
            &CollectingDiagnostics::new(),
        )
        .unwrap();
        let names: Vec<_> = colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["brand_red", "brand_red"]);
    }

    #[test]
    fn test_one_failing_document_fails_the_batch() {
        let good = document(vec![component("3:1", "gap", Some(4.0))], vec![]);
        let bad = document(vec![component("3:1", "", Some(4.0))], vec![]);
        let result = extract::<Spacing>(
            &[good.clone(), bad, good],
            &NodeFilter::default(),
            &NamingRule::default(),
            &CollectingDiagnostics::new(),
        );
        assert!(matches!(result, Err(Error::InvalidSpacingName(_))));
    }
}
