use crate::auth::AuthContext;
use crate::database::models::item::{ItemSummary, STATUS_COMPLETED, STATUS_PENDING};

use super::components::{button, card, field, html_escape, stat, ButtonVariant};
use super::layout::{page, APP_TITLE};

pub const EMPTY_MESSAGE: &str = "No items yet. Create your first item to get started.";

/// Counts shown in the stat cards, computed over the fetched rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn from_items(items: &[ItemSummary]) -> Self {
        Self {
            total: items.len(),
            pending: items.iter().filter(|i| i.status == STATUS_PENDING).count(),
            completed: items.iter().filter(|i| i.status == STATUS_COMPLETED).count(),
        }
    }
}

pub fn render(auth: Option<&AuthContext>, items: &[ItemSummary]) -> String {
    let counts = StatusCounts::from_items(items);

    let header = r#"<div><h1>Dashboard</h1><p class="muted">Welcome to your app template</p></div>"#;

    let tenant_id = auth.map(|a| a.tenant_id.to_string());
    let user_id = auth.map(|a| a.user_id.to_string());
    let context = card(&format!(
        r#"<h2>Authentication Context</h2><div class="grid-2">{}{}{}{}</div>"#,
        field("Tenant ID:", tenant_id.as_deref().unwrap_or("Not set")),
        field("Tenant Slug:", auth.map(|a| a.tenant_slug.as_str()).unwrap_or("Not set")),
        field("User ID:", user_id.as_deref().unwrap_or("Not authenticated")),
        field("Status:", if auth.is_some() { "Connected" } else { "Standalone" }),
    ));

    let stats = format!(
        r#"<div class="grid-3">{}{}{}</div>"#,
        stat("Total Items", counts.total),
        stat("Pending", counts.pending),
        stat("Completed", counts.completed),
    );

    let actions = card(&format!(
        r#"<h2>Quick Actions</h2><div class="actions">{}{}{}<form method="post" action="/logout"><button type="submit" class="btn btn-outline">Log out</button></form></div>"#,
        button("Create Item", ButtonVariant::Primary),
        button("View All", ButtonVariant::Secondary),
        button("Settings", ButtonVariant::Outline),
    ));

    let recent = if items.is_empty() {
        format!(r#"<p class="muted">{}</p>"#, EMPTY_MESSAGE)
    } else {
        let rows: String = items
            .iter()
            .map(|item| {
                format!(
                    r#"<li data-id="{}"><span>{}</span><span class="muted small">{}</span></li>"#,
                    item.id,
                    html_escape(&item.title),
                    html_escape(&item.status)
                )
            })
            .collect();
        format!(r#"<ul class="items">{}</ul>"#, rows)
    };
    let recent = card(&format!("<h2>Recent Items</h2>{}", recent));

    page(
        APP_TITLE,
        &format!(
            r#"<main><div class="stack">{}{}{}{}{}</div></main>"#,
            header, context, stats, actions, recent
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::item::STATUS_IN_PROGRESS;
    use crate::database::TenantId;
    use uuid::Uuid;

    fn summary(title: &str, status: &str) -> ItemSummary {
        ItemSummary {
            id: Uuid::new_v4(),
            title: title.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn counts_by_status() {
        let items = vec![
            summary("a", STATUS_PENDING),
            summary("b", STATUS_COMPLETED),
            summary("c", STATUS_PENDING),
            summary("d", STATUS_IN_PROGRESS),
        ];
        assert_eq!(
            StatusCounts::from_items(&items),
            StatusCounts {
                total: 4,
                pending: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn unauthenticated_placeholder() {
        let html = render(None, &[]);
        assert!(html.contains("Standalone"));
        assert!(html.contains("Not authenticated"));
        assert!(html.contains("Not set"));
        assert!(html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn authenticated_lists_items_escaped() {
        let auth = AuthContext {
            tenant_id: TenantId::new(Uuid::new_v4()),
            tenant_slug: "acme".to_string(),
            user_id: Uuid::new_v4(),
            role: "member".to_string(),
            name: None,
            email: None,
        };
        let items = vec![summary("<Buy milk>", STATUS_PENDING)];
        let html = render(Some(&auth), &items);

        assert!(html.contains("Connected"));
        assert!(html.contains(&auth.tenant_id.to_string()));
        assert!(html.contains("acme"));
        assert!(html.contains("&lt;Buy milk&gt;"));
        assert!(!html.contains("<Buy milk>"));
        assert!(!html.contains(EMPTY_MESSAGE));
    }
}
