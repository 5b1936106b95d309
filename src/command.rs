//! Logon wrapping
//!
//! Command files written for interactive testing often carry bare
//! `<CdrCommand>` elements and let the tool supply the `CdrCommandSet`
//! envelope with a leading logon and trailing logoff. The buffer must not
//! already carry either element; sending a doubly-wrapped set confuses the
//! server far enough that the error message is useless.

use crate::config::Logon;
use crate::error::CdrError;

/// Wrap a bare command buffer in a `<CdrCommandSet>` with a `CdrLogon`
/// first and a `CdrLogoff` last.
pub fn wrap_logon(logon: &Logon, body: &[u8]) -> Result<Vec<u8>, CdrError> {
    let body = std::str::from_utf8(body)?;

    if body.contains("<CdrCommandSet>") {
        return Err(CdrError::AlreadyWrapped("<CdrCommandSet>"));
    }
    if body.contains("<CdrLogon>") {
        return Err(CdrError::AlreadyWrapped("<CdrLogon>"));
    }

    let mut wrapped = String::with_capacity(body.len() + 256);
    wrapped.push_str("<CdrCommandSet>\n <CdrCommand>\n  <CdrLogon>\n   <UserName>");
    wrapped.push_str(&logon.user);
    wrapped.push_str("</UserName>\n   <Password>");
    wrapped.push_str(&logon.password);
    wrapped.push_str("</Password>\n  </CdrLogon>\n </CdrCommand>\n");
    wrapped.push_str(body);
    wrapped.push_str("\n <CdrCommand>\n  <CdrLogoff/>\n </CdrCommand>\n</CdrCommandSet>\n");

    Ok(wrapped.into_bytes())
}
