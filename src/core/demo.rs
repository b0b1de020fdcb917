use crate::core::greeter;
use crate::domain::model::InterfaceId;
use crate::domain::ports::{ConfigProvider, InterfaceResolver};
use crate::utils::error::Result;
use std::io::Write;

pub const BANNER_TITLE: &str = "VC6 CMake Proxy Example";
pub const BANNER_RULE: &str = "=======================";
pub const GUID_LABEL: &str = "IDL Interface GUID";

/// Runs the greet-then-identify flow against an output sink.
pub struct Demo<R: InterfaceResolver, C: ConfigProvider> {
    resolver: R,
    config: C,
}

impl<R: InterfaceResolver, C: ConfigProvider> Demo<R, C> {
    pub fn new(resolver: R, config: C) -> Self {
        Self { resolver, config }
    }

    /// Writes the banner, the greeting and the identifier line, returning the
    /// identifier that was printed.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<InterfaceId> {
        writeln!(out, "{}", BANNER_TITLE)?;
        writeln!(out, "{}", BANNER_RULE)?;
        writeln!(out)?;

        greeter::greet(out, self.config.name())?;

        let interface = self.config.interface();
        let iid = self.resolver.identifier_of(interface)?;
        tracing::debug!("Resolved {} to {}", interface, iid);

        let rendered = if self.config.braced() {
            iid.braced()
        } else {
            iid.to_string()
        };
        writeln!(out)?;
        writeln!(out, "{}: {}", GUID_LABEL, rendered)?;
        out.flush()?;

        Ok(iid)
    }
}
