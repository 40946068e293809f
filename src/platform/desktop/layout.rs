/// Something that knows how tall the visible viewport is.
pub trait LayoutProvider {
    fn viewport_height(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableChrome {
    pub table_top: f64,
    pub container_padding: f64,
    pub main_padding: f64,
    pub pagination_height: f64,
}

impl Default for TableChrome {
    fn default() -> Self {
        Self {
            table_top: 260.0,
            container_padding: 16.0,
            main_padding: 32.0,
            pagination_height: 52.0,
        }
    }
}

const MIN_TABLE_HEIGHT: f64 = 160.0;

/// Height left for the scrollable table body.
pub fn table_max_height(viewport_height: f64, chrome: &TableChrome) -> f64 {
    let available = viewport_height
        - chrome.table_top
        - chrome.container_padding
        - chrome.main_padding
        - chrome.pagination_height;
    if available.is_finite() {
        available.max(MIN_TABLE_HEIGHT)
    } else {
        MIN_TABLE_HEIGHT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopWindow;

impl LayoutProvider for DesktopWindow {
    fn viewport_height(&self) -> f64 {
        let desktop = dioxus::desktop::window();
        let scale = desktop.window.scale_factor();
        desktop.window.inner_size().to_logical::<f64>(scale).height
    }
}
