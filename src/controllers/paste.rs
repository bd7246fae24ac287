use tracing::info;

use crate::error::StoreResult;
use crate::models::{NewPaste, Paste};
use crate::App;

/// Build a paste from submitted fields and store it. Collisions are not retried.
pub async fn submit(app: &App, new_paste: NewPaste) -> StoreResult<Paste> {
    let paste = new_paste.into_paste(&app.names);

    info!(
        "new paste: name='{name}', title='{title}', hl='{hl}', private={private}, size={size}",
        name = paste.name,
        title = paste.title,
        hl = paste.highlight_alias,
        private = paste.is_private,
        size = paste.content.len()
    );

    app.store.create(&paste).await?;

    Ok(paste)
}

pub async fn fetch(app: &App, name: &str) -> StoreResult<Paste> {
    app.store.fetch(name).await
}

/// Public pastes, most recent first.
pub async fn list_public(app: &App) -> StoreResult<Vec<Paste>> {
    app.store.list_public().await
}
