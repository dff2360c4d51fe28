pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Landing page: header scroll spy and in-page navigation
#[wasm_bindgen]
pub fn init_landing() -> Result<(), JsError> {
    let config = shared::config::site_config();
    layout::landing::mount_landing_nav(&config.navigation)?;
    Ok(())
}

/// Product catalog page: filters, pagination and URL state
#[wasm_bindgen]
pub fn init_catalog() -> Result<(), JsError> {
    let config = shared::config::site_config();
    domain::a001_product::ui::list::mount_catalog(&config.catalog)?;
    Ok(())
}
