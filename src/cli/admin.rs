use crate::backends::AdminBackend;
use crate::cli::AdminAction;
use crate::console::console;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub async fn handle_admin(action: AdminAction, backend: &dyn AdminBackend) -> Result<()> {
    match action {
        AdminAction::List { category } => {
            let suggestions = match category {
                Some(category) => backend.list_by_category(&category).await?,
                None => backend.list_suggestions().await?,
            };
            console().suggestion_table(&suggestions);
        }
        AdminAction::Recent { limit } => {
            console().suggestion_table(&backend.recently_used(limit).await?);
        }
        AdminAction::Frequency { min, max } => {
            if min > max {
                anyhow::bail!("--min ({}) must not exceed --max ({})", min, max);
            }
            console().suggestion_table(&backend.by_frequency_range(min, max).await?);
        }
        AdminAction::Add { text, category } => {
            let created = backend
                .create_suggestion(&text, category.as_deref())
                .await
                .context("Failed to add suggestion")?;
            console().success(&format!("Saved '{}' (id {})", created.text, created.id));
        }
        AdminAction::Update { id, text, category } => {
            let updated = backend
                .update_suggestion(id, &text, category.as_deref())
                .await
                .with_context(|| format!("Failed to update suggestion {}", id))?;
            console().success(&format!("Updated suggestion {}", updated.id));
            console().suggestion_row(&updated);
        }
        AdminAction::Delete { id } => {
            backend
                .delete_suggestion(id)
                .await
                .with_context(|| format!("Failed to delete suggestion {}", id))?;
            console().success(&format!("Deleted suggestion {}", id));
        }
        AdminAction::Bulk {
            category,
            file,
            texts,
        } => {
            let mut entries = match file {
                Some(path) => split_entries(&read_entries(&path)?),
                None => Vec::new(),
            };
            entries.extend(texts.iter().flat_map(|t| split_entries(t)));

            if entries.is_empty() {
                anyhow::bail!("Nothing to add: pass entries as arguments or with --file");
            }
            backend
                .bulk_create(&entries, category.as_deref())
                .await
                .context("Bulk create failed")?;
            console().success(&format!("Added {} suggestion(s)", entries.len()));
        }
        AdminAction::Stats => {
            console().stats(&backend.stats().await?);
        }
    }
    Ok(())
}

/// One entry per line, trimmed, blank lines dropped.
pub fn split_entries(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_entries(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read entries from stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MockBackend;
    use std::io::Write;

    #[test]
    fn split_entries_trims_and_drops_blanks() {
        let entries = split_entries("  apple \n\n banana\r\n   \ncherry");
        assert_eq!(entries, vec!["apple", "banana", "cherry"]);
    }

    #[tokio::test]
    async fn bulk_combines_file_and_arguments() {
        let backend = MockBackend::empty();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "one\n\n  two  ").unwrap();

        handle_admin(
            AdminAction::Bulk {
                category: Some("english".to_string()),
                file: Some(file.path().to_path_buf()),
                texts: vec!["three".to_string()],
            },
            &backend,
        )
        .await
        .unwrap();

        let stats = backend.stats().await.unwrap();
        assert_eq!(stats.total_suggestions, 3);
        assert_eq!(stats.english_words, 3);
    }

    #[tokio::test]
    async fn bulk_without_entries_fails() {
        let backend = MockBackend::empty();

        let result = handle_admin(
            AdminAction::Bulk {
                category: None,
                file: None,
                texts: vec!["   ".to_string()],
            },
            &backend,
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn frequency_range_must_be_ordered() {
        let backend = MockBackend::empty();

        let result = handle_admin(AdminAction::Frequency { min: 9, max: 2 }, &backend).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn add_then_delete() {
        let backend = MockBackend::empty();

        handle_admin(
            AdminAction::Add {
                text: "kiwi".to_string(),
                category: None,
            },
            &backend,
        )
        .await
        .unwrap();
        handle_admin(AdminAction::Delete { id: 1 }, &backend).await.unwrap();

        assert!(backend.list_suggestions().await.unwrap().is_empty());
        assert!(handle_admin(AdminAction::Delete { id: 1 }, &backend).await.is_err());
    }
}
