//! # flowpilot
//!
//! Leptos + WASM front end for the FlowPilot marketing site and its demo
//! account flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders every route once; after hydration all behavior runs in
//! the browser. Accounts, sessions and prefill values live in
//! `localStorage`/`sessionStorage` behind [`storage::AccountStore`], and every
//! flow in [`auth`] is a plain function over that store so it can be tested
//! without a browser.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages;
pub mod profile;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
