//! Host notification channel.
//!
//! Parameter changes reach the host application as navigations to a custom
//! URL scheme:
//!
//! ```text
//! sphere://comp/<param>/<value>     e.g. sphere://comp/threshold/-5
//! sphere://comp/delta/<1|0>
//! ```
//!
//! [`HostLink`] abstracts the navigation itself so the panel works the same
//! in a web view, the native GUI (which logs), and tests (which record).

use core::fmt;
use std::cell::RefCell;
use url::Url;

use crate::{CompParam, PanelError};

/// URL scheme understood by the host.
pub const SCHEME: &str = "sphere";

/// Module segment for compressor parameters.
pub const MODULE: &str = "comp";

/// Path key of the delta-monitoring toggle.
pub const DELTA_KEY: &str = "delta";

/// One host notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostUrl {
    /// A knob parameter changed.
    Param {
        /// Which parameter.
        param: CompParam,
        /// New value.
        value: f32,
    },
    /// Delta monitoring toggled.
    Delta(bool),
}

impl HostUrl {
    /// Notification for a parameter change.
    pub fn param(param: CompParam, value: f32) -> Self {
        HostUrl::Param { param, value }
    }

    /// Parse a `sphere://comp/...` URL.
    pub fn parse(input: &str) -> Result<Self, PanelError> {
        let invalid = || PanelError::InvalidHostUrl(input.to_string());
        let url = Url::parse(input).map_err(|_| invalid())?;
        if url.scheme() != SCHEME || url.host_str() != Some(MODULE) {
            return Err(invalid());
        }

        let mut segments = url.path_segments().ok_or_else(invalid)?;
        let (Some(key), Some(raw), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(invalid());
        };

        if key == DELTA_KEY {
            return match raw {
                "1" => Ok(HostUrl::Delta(true)),
                "0" => Ok(HostUrl::Delta(false)),
                _ => Err(invalid()),
            };
        }

        let param: CompParam = key.parse()?;
        let value: f32 = raw.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(HostUrl::Param { param, value })
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostUrl::Param { param, value } => {
                write!(f, "{SCHEME}://{MODULE}/{}/{value}", param.key())
            }
            HostUrl::Delta(on) => write!(f, "{SCHEME}://{MODULE}/{DELTA_KEY}/{}", u8::from(*on)),
        }
    }
}

/// Side-effecting channel to the host application.
///
/// Called on the UI thread for every user-driven change. Programmatic
/// updates never reach it.
pub trait HostLink {
    /// Deliver one notification.
    fn navigate(&self, url: &HostUrl);
}

/// Host link that only logs navigations.
///
/// Used where no host application is attached (native GUI, CLI preview).
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHost;

impl HostLink for LoggingHost {
    fn navigate(&self, url: &HostUrl) {
        tracing::info!(url = %url, "host navigation");
    }
}

/// Host link that records every navigation in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    urls: RefCell<Vec<HostUrl>>,
}

impl RecordingHost {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All navigations so far.
    pub fn urls(&self) -> Vec<HostUrl> {
        self.urls.borrow().clone()
    }

    /// All navigations so far, formatted.
    pub fn url_strings(&self) -> Vec<String> {
        self.urls.borrow().iter().map(ToString::to_string).collect()
    }

    /// Number of navigations so far.
    pub fn len(&self) -> usize {
        self.urls.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.urls.borrow().is_empty()
    }

    /// Drain recorded navigations.
    pub fn take(&self) -> Vec<HostUrl> {
        std::mem::take(&mut *self.urls.borrow_mut())
    }
}

impl HostLink for RecordingHost {
    fn navigate(&self, url: &HostUrl) {
        tracing::debug!(url = %url, "host navigation recorded");
        self.urls.borrow_mut().push(*url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_url_format() {
        let url = HostUrl::param(CompParam::Threshold, -5.0);
        assert_eq!(url.to_string(), "sphere://comp/threshold/-5");
        let url = HostUrl::param(CompParam::Ratio, 4.5);
        assert_eq!(url.to_string(), "sphere://comp/ratio/4.5");
    }

    #[test]
    fn delta_url_format() {
        assert_eq!(HostUrl::Delta(true).to_string(), "sphere://comp/delta/1");
        assert_eq!(HostUrl::Delta(false).to_string(), "sphere://comp/delta/0");
    }

    #[test]
    fn parse_round_trips_formatted_urls() {
        for url in [
            HostUrl::param(CompParam::Attack, 0.1),
            HostUrl::param(CompParam::Makeup, -12.0),
            HostUrl::Delta(true),
        ] {
            assert_eq!(HostUrl::parse(&url.to_string()).unwrap(), url);
        }
    }

    #[test]
    fn parse_rejects_foreign_urls() {
        for bad in [
            "https://comp/threshold/-5",
            "sphere://eq/threshold/-5",
            "sphere://comp/threshold",
            "sphere://comp/threshold/-5/extra",
            "sphere://comp/threshold/loud",
            "sphere://comp/delta/2",
            "not a url",
        ] {
            assert!(HostUrl::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn parse_unknown_param_names_it() {
        let err = HostUrl::parse("sphere://comp/sidechain/1").unwrap_err();
        assert!(matches!(err, PanelError::UnknownParam(ref k) if k == "sidechain"));
    }

    #[test]
    fn recorder_keeps_order_and_drains() {
        let host = RecordingHost::new();
        host.navigate(&HostUrl::param(CompParam::Knee, 3.0));
        host.navigate(&HostUrl::Delta(true));
        assert_eq!(
            host.url_strings(),
            vec!["sphere://comp/knee/3", "sphere://comp/delta/1"]
        );
        assert_eq!(host.take().len(), 2);
        assert!(host.is_empty());
    }
}
