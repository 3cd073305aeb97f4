#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Botwatch dashboard: a Yew front-end for monitoring and administering the
//! download bot through its statistics API.
//!
//! DOM-free state, formatting and request logic live in [`core`], [`features`]
//! and [`i18n`] and are tested natively; the browser shell is wasm-only.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::store::AppStore;
    use crate::features::cards::state::PRIMARY_CARDS;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn every_primary_card_has_a_localized_title() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        for card in PRIMARY_CARDS {
            assert_ne!(bundle.text(card.title_key()), card.title_key(), "{card:?}");
        }
    }

    #[test]
    fn fresh_store_is_idle() {
        let store = AppStore::default();
        assert_eq!(store.status.in_flight(), 0);
        assert!(!store.modal.is_open());
    }
}
