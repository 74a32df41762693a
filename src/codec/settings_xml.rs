// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! XML codec for reading the settings document.
//!
//! The device answers `GET /win` with a flat document:
//!
//! ```xml
//! <vs><ac>128</ac><cl>255</cl><cl>160</cl><cl>0</cl>...<ds>Kitchen</ds></vs>
//! ```

use xmltree::{Element, XMLNode};

use crate::error::ParseError;
use crate::protocol::RawResponse;
use crate::types::{Settings, SettingsField};

/// Path the settings document is read from.
pub const PATH: &str = "/win";

/// Root element of the settings document.
pub const ROOT: &str = "vs";

/// Element holding the UI description.
pub const DESCRIPTION_TAG: &str = "ds";

/// Decodes the settings document.
///
/// Every child other than the description is kept, in document order.
///
/// # Errors
///
/// Returns `ParseError::Xml` if the body is not well-formed XML and
/// `ParseError::UnexpectedRoot` if the root element is not `<vs>`.
pub fn decode(response: &RawResponse) -> Result<Settings, ParseError> {
    let root = Element::parse(response.body().as_bytes()).map_err(|err| ParseError::Xml {
        url: response.url().to_string(),
        body: response.body().to_string(),
        message: err.to_string(),
    })?;

    if root.name != ROOT {
        return Err(ParseError::UnexpectedRoot {
            url: response.url().to_string(),
            expected: ROOT,
            found: root.name,
        });
    }

    let mut description = None;
    let mut fields = Vec::new();
    for child in root.children.iter().filter_map(XMLNode::as_element) {
        let value = child
            .get_text()
            .map(|text| text.into_owned())
            .unwrap_or_default();
        if child.name == DESCRIPTION_TAG {
            description = Some(value);
        } else {
            fields.push(SettingsField {
                tag: child.name.clone(),
                value,
            });
        }
    }

    Ok(Settings::from_parts(description, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &str) -> RawResponse {
        RawResponse::new("http://wled.local/win", body)
    }

    const WIN: &str = "<?xml version=\"1.0\"?><vs><ac>128</ac><cl>255</cl><cl>160</cl><cl>0</cl>\
        <cs>0</cs><cs>0</cs><cs>0</cs><ns>0</ns><nr>1</nr><nl>0</nl><nf>1</nf><nd>60</nd>\
        <nt>0</nt><fx>0</fx><sx>132</sx><ix>255</ix><fp>1</fp><wv>-1</wv><ws>0</ws>\
        <ps>0</ps><cy>0</cy><ds>Kitchen</ds><ss>0</ss></vs>";

    #[test]
    fn decodes_description_and_passthrough() {
        let settings = decode(&response(WIN)).unwrap();
        assert_eq!(settings.description(), Some("Kitchen"));
        assert_eq!(settings.brightness(), Some(128));
        assert_eq!(
            settings.primary_color(),
            Some(crate::types::Color::rgb(255, 160, 0))
        );
        assert_eq!(settings.field("wv"), Some("-1"));
        assert_eq!(settings.field("ss"), Some("0"));
        assert_eq!(settings.passthrough().len(), 22);
        assert!(settings.passthrough().iter().all(|f| f.tag != "ds"));
    }

    #[test]
    fn missing_description() {
        let settings = decode(&response("<vs><ac>10</ac></vs>")).unwrap();
        assert_eq!(settings.description(), None);
    }

    #[test]
    fn empty_description() {
        let settings = decode(&response("<vs><ds></ds></vs>")).unwrap();
        assert_eq!(settings.description(), None);
    }

    #[test]
    fn escaped_description() {
        let settings = decode(&response("<vs><ds>Bed &amp; Bath</ds></vs>")).unwrap();
        assert_eq!(settings.description(), Some("Bed & Bath"));
    }

    #[test]
    fn malformed_xml_reports_body() {
        let err = decode(&response("<vs><ds>oops</vs>")).unwrap_err();
        assert!(matches!(err, ParseError::Xml { .. }));
        assert_eq!(err.body(), Some("<vs><ds>oops</vs>"));
    }

    #[test]
    fn wrong_root_is_rejected() {
        let err = decode(&response("<html><body/></html>")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedRoot { ref found, .. } if found == "html"
        ));
    }
}
