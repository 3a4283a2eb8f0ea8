//! HTML projection of the listing, and seeding from server-rendered markup
//!
//! Rendering is a pure function of state. Scraping is only used once, to
//! derive an initial catalog from the page when nothing is stored yet.

use crate::list::{ItemElement, ProductList};
use crate::phase::ItemPhase;
use once_cell::sync::Lazy;
use regex::Regex;
use shelf_catalog::{parse_display_price, PriceFormatter, Product};
use std::borrow::Cow;
use std::fmt::Write as _;
use url::Url;

/// Class marking a product element
pub const ITEM_CLASS: &str = "product-item";

/// Longest entity name or numeric reference considered, `;` included
const MAX_REFERENCE_LEN: usize = 12;

static OPEN_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<([A-Za-z][A-Za-z0-9]*)\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("valid regex")
});
static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("valid regex")
});
static SRC_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)(?:^|\s)src\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("valid regex")
});
static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("valid regex"));
static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("valid regex"));

/// Render one product as an item element
///
/// The image is left out when its URL does not parse.
#[must_use]
pub fn render_item(product: &Product, formatter: &PriceFormatter) -> String {
    render_element(product, formatter, "", "")
}

/// Render the whole container, including fading and hidden state
#[must_use]
pub fn render_list(list: &ProductList, formatter: &PriceFormatter) -> String {
    let mut out = String::from(r#"<section id="product-list" class="products">"#);
    for item in list.items() {
        out.push_str(&render_item_element(item, formatter));
    }
    out.push_str("</section>");
    out
}

fn render_item_element(item: &ItemElement, formatter: &PriceFormatter) -> String {
    let (extra_class, style) = match item.phase {
        ItemPhase::Visible => ("", ""),
        ItemPhase::FadingOut { .. } => (" is-hiding", r#" style="opacity: 0""#),
        ItemPhase::Hidden => (" is-hiding", r#" style="display: none""#),
    };
    let attrs = format!(r#" data-id="{}"{style}"#, item.id.0);
    render_element(&item.product, formatter, extra_class, &attrs)
}

fn render_element(
    product: &Product,
    formatter: &PriceFormatter,
    extra_class: &str,
    attrs: &str,
) -> String {
    let mut out = String::new();
    let _ = write!(out, r#"<article class="{ITEM_CLASS}{extra_class}"{attrs}>"#);

    if let Some(img) = product.image_url.as_deref().filter(|u| Url::parse(u).is_ok()) {
        let _ = write!(
            out,
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(img),
            escape_html(&product.name)
        );
    }
    let _ = write!(out, r#"<h3 class="product-name">{}</h3>"#, escape_html(&product.name));
    if let Some(desc) = product.description.as_deref() {
        let _ = write!(out, r#"<p class="product-desc">{}</p>"#, escape_html(desc));
    }
    let _ = write!(
        out,
        r#"<p class="price">{}</p>"#,
        escape_html(&formatter.format(product.price))
    );
    out.push_str("</article>");
    out
}

/// Derive products from server-rendered item elements
///
/// Each element carrying the `product-item` class yields one product:
/// - name: `.product-name`, else the first `h3`/`h2`
/// - description: `.product-desc`, else the first `p` without `.price`
/// - price: digits of the `.price` text
/// - image: `src` of the first `img`
#[must_use]
pub fn scrape_products(markup: &str) -> Vec<Product> {
    // An unterminated comment runs to the end of the document.
    let markup = COMMENT.replace_all(markup, "");
    let markup = markup.as_ref();
    let mut products = Vec::new();
    let mut cursor = 0;

    for caps in OPEN_TAG.captures_iter(markup) {
        let Some(open) = caps.get(0) else {
            continue;
        };
        if open.start() < cursor || !has_class(&caps[2], ITEM_CLASS) {
            continue;
        }
        let tag = caps[1].to_ascii_lowercase();
        let Some((inner, end)) = element_inner(markup, &tag, open.end()) else {
            continue;
        };
        products.push(scrape_item(inner));
        cursor = end;
    }

    tracing::debug!(products = products.len(), "scraped product markup");
    products
}

fn scrape_item(body: &str) -> Product {
    let name = find_text(body, |_, attrs| has_class(attrs, "product-name"))
        .or_else(|| find_text(body, |tag, _| tag == "h3" || tag == "h2"))
        .unwrap_or_default();
    let description = find_text(body, |_, attrs| has_class(attrs, "product-desc"))
        .or_else(|| find_text(body, |tag, attrs| tag == "p" && !has_class(attrs, "price")))
        .unwrap_or_default();
    let price = find_text(body, |_, attrs| has_class(attrs, "price"))
        .map_or(0.0, |text| parse_display_price(&text));
    let image_url = OPEN_TAG
        .captures_iter(body)
        .find(|caps| caps[1].eq_ignore_ascii_case("img"))
        .and_then(|caps| attr_value(&SRC_ATTR, &caps[2]))
        .unwrap_or_default();

    Product::new(name, price)
        .with_description(description)
        .with_image_url(image_url)
}

/// Trimmed text content of the first element accepted by `pred(tag, attrs)`
fn find_text(body: &str, pred: impl Fn(&str, &str) -> bool) -> Option<String> {
    OPEN_TAG.captures_iter(body).find_map(|caps| {
        let tag = caps[1].to_ascii_lowercase();
        if !pred(&tag, &caps[2]) {
            return None;
        }
        let open = caps.get(0)?;
        let (inner, _) = element_inner(body, &tag, open.end())?;
        Some(text_content(inner))
    })
}

/// Content between an opening tag ending at `from` and its matching close,
/// plus the offset just past the close tag. Same-name nesting is honoured.
fn element_inner<'a>(html: &'a str, tag: &str, from: usize) -> Option<(&'a str, usize)> {
    let lower = html.to_ascii_lowercase();
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}");
    let mut depth = 1usize;
    let mut pos = from;

    while pos < lower.len() {
        let next_open = find_tag(&lower, &open_pat, pos);
        let next_close = find_tag(&lower, &close_pat, pos)?;
        match next_open {
            Some(o) if o < next_close => {
                depth += 1;
                pos = o + open_pat.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    let end = lower[next_close..]
                        .find('>')
                        .map_or(lower.len(), |i| next_close + i + 1);
                    return Some((&html[from..next_close], end));
                }
                pos = next_close + close_pat.len();
            }
        }
    }
    None
}

/// Position of `<name` or `</name` not followed by another name character
fn find_tag(lower: &str, pat: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(i) = lower[pos..].find(pat) {
        let at = pos + i;
        let after = lower.as_bytes().get(at + pat.len()).copied();
        if !after.is_some_and(|b| b.is_ascii_alphanumeric()) {
            return Some(at);
        }
        pos = at + pat.len();
    }
    None
}

fn has_class(attrs: &str, class: &str) -> bool {
    attr_value(&CLASS_ATTR, attrs).is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

fn attr_value(re: &Regex, attrs: &str) -> Option<String> {
    let caps = re.captures(attrs)?;
    let raw = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?.as_str();
    Some(decode_entities(raw).into_owned())
}

fn text_content(inner: &str) -> String {
    let stripped = ANY_TAG.replace_all(inner, "");
    decode_entities(&stripped).trim().to_string()
}

/// Escape text for element content and quoted attribute values
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Decode character references as an HTML parser would for text and
/// attribute values. Unknown or malformed references stay literal.
fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_reference(tail) {
            Some((c, len)) => {
                out.push(c);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Character for the reference opening `tail`, and the reference's byte length
fn decode_reference(tail: &str) -> Option<(char, usize)> {
    let semi = tail
        .char_indices()
        .take(MAX_REFERENCE_LEN)
        .find_map(|(i, c)| (c == ';').then_some(i))?;
    let name = &tail[1..semi];

    let c = if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            None if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) => {
                number.parse::<u32>().ok()?
            }
            _ => return None,
        };
        match code {
            0 => char::REPLACEMENT_CHARACTER,
            _ => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
        }
    } else {
        match name {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            _ => return None,
        }
    };
    Some((c, semi + 1))
}
