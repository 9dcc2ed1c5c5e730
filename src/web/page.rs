//! Server-rendered single page: title, banners and the record form.

use crate::models::bristol::BristolCategory;
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Warning(String),
    Error(String),
}

impl Banner {
    fn class(&self) -> &'static str {
        match self {
            Banner::Success(_) => "success",
            Banner::Warning(_) => "warning",
            Banner::Error(_) => "error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Banner::Success(t) | Banner::Warning(t) | Banner::Error(t) => t,
        }
    }
}

/// Everything the page needs to render.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Input values as rendered (`YYYY-MM-DD`, `HH:MM`, or what the user typed).
    pub day: String,
    pub hour: String,
    pub selected: BristolCategory,
    pub banners: Vec<Banner>,
}

impl PageView {
    pub fn new(day: NaiveDate, hour: NaiveTime) -> Self {
        Self {
            day: day.format("%Y-%m-%d").to_string(),
            hour: hour.format("%H:%M").to_string(),
            selected: BristolCategory::HardLumps,
            banners: Vec::new(),
        }
    }

    /// Re-render a rejected submission with the values the user sent.
    pub fn from_raw(day: &str, hour: &str, label: &str) -> Self {
        Self {
            day: day.trim().to_string(),
            hour: hour.trim().to_string(),
            selected: BristolCategory::from_label(label).unwrap_or(BristolCategory::HardLumps),
            banners: Vec::new(),
        }
    }

    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banners.push(banner);
        self
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 32rem; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-top: 1rem; font-weight: 600; }
input, select, button { font-size: 1rem; padding: .4rem; width: 100%; box-sizing: border-box; }
button { margin-top: 1.5rem; cursor: pointer; }
.caption { color: #666; }
.banner { padding: .6rem .8rem; border-radius: .3rem; margin: 1rem 0; }
.success { background: #e6f4ea; color: #1e4620; }
.warning { background: #fff4e5; color: #663c00; }
.error { background: #fdecea; color: #611a15; }
"#;

pub fn render(view: &PageView) -> String {
    let banners: String = view
        .banners
        .iter()
        .map(|b| {
            format!(
                r#"<div class="banner {}">{}</div>"#,
                b.class(),
                escape_html(b.text())
            )
        })
        .collect();

    let options: String = BristolCategory::ALL
        .iter()
        .map(|c| {
            let selected = if *c == view.selected { " selected" } else { "" };
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                escape_html(c.label()),
                selected
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>Registro de Fezes do Pet</title>
  <style>{style}</style>
</head>
<body>
  <h1>Registro diário de fezes do pet</h1>
  <p class="caption">Cada envio grava uma nova linha na planilha do Google Drive.</p>
  {banners}
  <form method="post" action="/">
    <label for="dia">Dia</label>
    <input type="date" id="dia" name="dia" value="{day}" required/>
    <label for="hora">Hora</label>
    <input type="time" id="hora" name="hora" value="{hour}" required/>
    <label for="tipo">Tipo (escala Bristol)</label>
    <select id="tipo" name="tipo">{options}</select>
    <button type="submit">Salvar registro</button>
  </form>
</body>
</html>"#,
        style = STYLE,
        banners = banners,
        day = escape_html(&view.day),
        hour = escape_html(&view.hour),
        options = options,
    )
}
