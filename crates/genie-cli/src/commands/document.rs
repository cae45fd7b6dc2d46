use anyhow::bail;
use genie_core::entities::TravelDocument;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::context::AppContext;
use crate::output::output;

/// A stored document with its expiry checked against today's date.
#[derive(Debug, Serialize)]
struct DocumentView<'a> {
    #[serde(flatten)]
    document: &'a TravelDocument,
    expired: bool,
}

/// Handle `genie document`.
pub fn handle(
    action: &DocumentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::List => {
            let today = chrono::Local::now().date_naive();
            let views: Vec<DocumentView<'_>> = ctx
                .store
                .state()
                .documents
                .iter()
                .map(|document| DocumentView {
                    document,
                    expired: document.is_expired(today),
                })
                .collect();
            output(&views, flags.format)
        }
        DocumentCommands::Add {
            title,
            kind,
            reference,
            expires,
        } => {
            let document = TravelDocument::new(title, *kind)?
                .with_reference(reference.as_deref())
                .with_expiry(*expires);
            let document = ctx.store.add_document(document).clone();
            ctx.save()?;
            output(&document, flags.format)
        }
        DocumentCommands::Remove { id } => {
            if !ctx.store.remove_document(id) {
                bail!("no document with id '{id}'");
            }
            ctx.save()?;
            output(&serde_json::json!({ "removed": id }), flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use chrono::NaiveDate;
    use genie_core::enums::DocumentKind;
    use pretty_assertions::assert_eq;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            state: None,
        }
    }

    #[test]
    fn add_persists_and_remove_rejects_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::in_dir(dir.path());
        let flags = flags();

        handle(
            &DocumentCommands::Add {
                title: "Passport".into(),
                kind: DocumentKind::Passport,
                reference: Some("Z1234567".into()),
                expires: NaiveDate::from_ymd_opt(2031, 1, 31),
            },
            &mut ctx,
            &flags,
        )
        .unwrap();

        let reopened = AppContext::in_dir(dir.path());
        let documents = &reopened.store.state().documents;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].reference.as_deref(), Some("Z1234567"));

        let err = handle(&DocumentCommands::Remove { id: "doc-none".into() }, &mut ctx, &flags)
            .unwrap_err();
        assert!(err.to_string().contains("doc-none"));
    }

    #[test]
    fn view_flattens_document_and_adds_expired_flag() {
        let document = TravelDocument::new("Visa", DocumentKind::Visa)
            .unwrap()
            .with_expiry(NaiveDate::from_ymd_opt(2020, 1, 1));
        let view = DocumentView {
            expired: document.is_expired(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            document: &document,
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["title"], "Visa");
        assert_eq!(value["expiresOn"], "2020-01-01");
        assert_eq!(value["expired"], true);
    }
}
