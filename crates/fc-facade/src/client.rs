//! # Client Code
//!
//! Works with the subsystems only through the facade. When the facade owns
//! the subsystems the client never learns they exist.

use std::io::Write;

use fc_01_subsystem_one::SubsystemOneApi;
use fc_02_subsystem_two::SubsystemTwoApi;
use tracing::debug;

use crate::application::facade::Facade;
use crate::domain::ClientError;

/// Run the facade's composite operation and write the result to `out`.
pub fn client_code<A, B, W>(facade: &Facade<'_, A, B>, out: &mut W) -> Result<(), ClientError>
where
    A: SubsystemOneApi,
    B: SubsystemTwoApi,
    W: Write + ?Sized,
{
    let result = facade.operation();
    debug!(bytes = result.len(), "Client writing facade output");
    out.write_all(result.as_bytes())?;
    out.flush()?;
    Ok(())
}
