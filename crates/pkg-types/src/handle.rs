//! The package-system handle: configuration plus the active event callback.

use crate::config::PkgConfig;
use crate::error::Result;
use crate::event::{EventCallback, PkgEvent};

/// Runtime context passed explicitly to every subcommand.
///
/// Holds at most one event callback. Independent handles never share a
/// callback, so separate dispatches (and tests) do not observe each other.
pub struct Handle {
    config: PkgConfig,
    callback: Option<Box<dyn EventCallback>>,
}

impl Handle {
    /// Create a handle with no event callback installed.
    pub fn new(config: PkgConfig) -> Self {
        Self {
            config,
            callback: None,
        }
    }

    pub fn config(&self) -> &PkgConfig {
        &self.config
    }

    /// Install the event callback. Replaces any previously installed one.
    pub fn set_event_callback(&mut self, callback: Box<dyn EventCallback>) {
        if self.callback.is_some() {
            log::debug!("Replacing installed event callback");
        }
        self.callback = Some(callback);
    }

    /// Whether a callback is installed.
    pub fn has_event_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Deliver an event synchronously to the installed callback.
    ///
    /// Returns the callback's own status. With no callback installed this is a
    /// no-op that reports success.
    pub fn emit(&mut self, event: &PkgEvent<'_>) -> Result<()> {
        match self.callback.as_mut() {
            Some(cb) => cb.on_event(event),
            None => Ok(()),
        }
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new(PkgConfig::default())
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("config", &self.config)
            .field("has_event_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::PkgError;
    use crate::package::{ArchiveError, Package};

    fn recorder(log: &Rc<RefCell<Vec<String>>>) -> Box<dyn EventCallback> {
        let log = Rc::clone(log);
        Box::new(move |ev: &PkgEvent<'_>| -> Result<()> {
            let entry = match ev {
                PkgEvent::InstallBegin { package } => format!("install:{}", package.name),
                PkgEvent::ArchiveError { path, .. } => format!("archive:{path}"),
                other => format!("{other:?}"),
            };
            log.borrow_mut().push(entry);
            Ok(())
        })
    }

    #[test]
    fn emit_without_callback_is_noop_success() {
        let mut h = Handle::default();
        assert!(!h.has_event_callback());
        let pkg = Package::new("foo", "1.0");
        assert!(h.emit(&PkgEvent::InstallBegin { package: &pkg }).is_ok());
    }

    #[test]
    fn emit_reaches_installed_callback() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut h = Handle::default();
        h.set_event_callback(recorder(&log));
        let pkg = Package::new("foo", "1.0");
        h.emit(&PkgEvent::InstallBegin { package: &pkg }).unwrap();
        let err = ArchiveError::new(0, "truncated");
        h.emit(&PkgEvent::ArchiveError {
            path: "/tmp/foo.txz",
            error: &err,
        })
        .unwrap();
        assert_eq!(*log.borrow(), ["install:foo", "archive:/tmp/foo.txz"]);
    }

    #[test]
    fn last_callback_wins() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut h = Handle::default();
        h.set_event_callback(recorder(&first));
        h.set_event_callback(recorder(&second));
        h.emit(&PkgEvent::FetchBegin { url: "https://pkg.example/meta" })
            .unwrap();
        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn callback_failure_passed_through() {
        let mut h = Handle::default();
        h.set_event_callback(Box::new(|_: &PkgEvent<'_>| -> Result<()> {
            Err(PkgError::Event("sink closed".into()))
        }));
        let err = h.emit(&PkgEvent::Error { message: "boom" }).unwrap_err();
        assert!(matches!(err, PkgError::Event(_)));
    }

    #[test]
    fn handles_do_not_share_callbacks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut a = Handle::default();
        let mut b = Handle::default();
        a.set_event_callback(recorder(&log));
        b.emit(&PkgEvent::Error { message: "unseen" }).unwrap();
        assert!(log.borrow().is_empty());
    }
}
