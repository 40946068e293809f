use crate::infra::settings::store::ColorScheme;

pub fn accent_color(name: &str) -> &'static str {
    match name {
        "dark" => "#25262b",
        "gray" => "#868e96",
        "red" => "#fa5252",
        "pink" => "#e64980",
        "grape" => "#be4bdb",
        "violet" => "#7950f2",
        "indigo" => "#4c6ef5",
        "cyan" => "#15aabf",
        "green" => "#40c057",
        "lime" => "#82c91e",
        "yellow" => "#fab005",
        "orange" => "#fd7e14",
        "teal" => "#12b886",
        _ => "#228be6",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub muted: &'static str,
}

pub fn palette(scheme: ColorScheme) -> Palette {
    match scheme {
        ColorScheme::Light => Palette {
            background: "#f9f9f9",
            surface: "#ffffff",
            text: "#1e1e1e",
            border: "#dee2e6",
            muted: "#868e96",
        },
        ColorScheme::Dark => Palette {
            background: "#212529",
            surface: "#2c2e33",
            text: "#f9f9f9",
            border: "#373a40",
            muted: "#909296",
        },
    }
}

pub fn root_container_style(scheme: ColorScheme) -> String {
    let palette = palette(scheme);
    format!(
        "font-family: 'Noto Sans JP', sans-serif; height: 100vh; display: flex; flex-direction: column; overflow: hidden; padding: 16px; box-sizing: border-box; outline: none; background: {}; color: {};",
        palette.background, palette.text
    )
}

pub fn table_container_style(max_height: f64) -> String {
    format!(
        "position: relative; flex: 1; min-height: 0; max-height: {max_height:.0}px; overflow: auto;"
    )
}

pub fn table_header_cell_style(scheme: ColorScheme) -> String {
    format!(
        "position: sticky; top: 0; z-index: 2; text-align: left; padding: 6px 8px; white-space: nowrap; background: {};",
        palette(scheme).surface
    )
}

pub fn button_style(accent: &str, active: bool) -> String {
    if active {
        format!(
            "border: 1px solid {accent}; background: {accent}; color: #fff; padding: 4px 10px; border-radius: 4px; cursor: pointer;"
        )
    } else {
        format!(
            "border: 1px solid {accent}; background: transparent; color: {accent}; padding: 4px 10px; border-radius: 4px; cursor: pointer;"
        )
    }
}
