//! Mounting the app into the page.

use super::components::Game;
use derive_more::Display;
use leptos::prelude::*;
use tictactoe_core::Settings;
use tracing::{info, instrument};
use wasm_bindgen::JsCast;

/// Why the app could not be mounted.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MountError {
    /// No window or document, e.g. outside a browser.
    #[display("No document available")]
    NoDocument,
    /// No element carries the mount id.
    #[display("No element with id {:?}", _0)]
    MissingElement(String),
    /// The element is not an HTML element.
    #[display("Element {:?} is not an HTML element", _0)]
    NotHtml(String),
}

impl std::error::Error for MountError {}

/// Mounts the game into the element named by `settings.mount_id()`.
#[instrument(skip(settings), fields(mount_id = %settings.mount_id()))]
pub fn mount(settings: &Settings) -> Result<(), MountError> {
    let id = settings.mount_id();
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;
    let parent = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.clone()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtml(id.clone()))?;

    let order = *settings.order();
    leptos::mount::mount_to(parent, move || view! { <Game order=order /> }).forget();
    info!(?order, "App mounted");
    Ok(())
}
