// SPDX-License-Identifier: MPL-2.0
//! WhatsApp inquiry deep links.
//!
//! "Request info" hands the conversation to WhatsApp through the documented
//! `wa.me` deep link. The number is used exactly as configured; the
//! storefront never validates it beyond substituting the default.

use crate::i18n::I18n;

/// Builds the `https://wa.me/{number}?text={message}` deep link.
///
/// URL encoding of the message is delegated to the HTTP stack's URL type.
/// Returns `None` only if the number renders the base URL unparseable.
#[must_use]
pub fn inquiry_link(number: &str, message: &str) -> Option<String> {
    let base = format!("https://wa.me/{number}");
    let url = reqwest::Url::parse_with_params(&base, &[("text", message)]).ok()?;
    Some(url.to_string())
}

/// Localized inquiry message for a product.
#[must_use]
pub fn inquiry_message(i18n: &I18n, product_name: &str) -> String {
    i18n.tr_with_args("inquiry-message", &[("product", product_name)])
}

/// Opens a URL with the platform's default handler.
///
/// Failure to spawn the handler is reported on stderr and otherwise ignored;
/// there is nothing actionable to surface in the UI.
pub fn open_external(url: &str) {
    #[cfg(target_os = "linux")]
    let result = std::process::Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn();

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    let result: std::io::Result<std::process::Child> = Err(std::io::Error::other(
        "no URL handler for this platform",
    ));

    if let Err(e) = result {
        eprintln!("Failed to open external link: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_targets_the_configured_number() {
        let url = inquiry_link("56912345678", "Hola").expect("valid link");
        assert!(url.starts_with("https://wa.me/56912345678?text="));
    }

    #[test]
    fn message_is_url_encoded() {
        let url = inquiry_link("1234567890", "Hola, quiero más información").expect("valid link");
        assert!(!url.contains(' '));
        assert!(url.contains("text="));
    }

    #[test]
    fn default_number_is_used_verbatim() {
        let url = inquiry_link(crate::config::DEFAULT_WHATSAPP_NUMBER, "Hi").expect("valid link");
        assert!(url.contains("wa.me/1234567890"));
    }

    #[test]
    fn localized_message_mentions_the_product() {
        let i18n = I18n::default();
        let message = inquiry_message(&i18n, "Tren de Madera");
        assert!(message.contains("Tren de Madera"));
    }
}
