//! Client-side demo of both facade configurations.

use std::io::Write;

use fc_facade::{client_code, ClientError, Facade, SubsystemOne, SubsystemTwo};
use tracing::info;

/// Run the client against a borrowing facade, then against an owning one.
pub fn run_demo<W: Write + ?Sized>(out: &mut W) -> Result<(), ClientError> {
    // The client may already have subsystem objects; the facade borrows them.
    let subsystem_one = SubsystemOne::new();
    let subsystem_two = SubsystemTwo::new();
    {
        let facade = Facade::new(Some(&subsystem_one), Some(&subsystem_two));
        info!(ownership = ?facade.ownership(), "Running client with lent subsystems");
        client_code(&facade, out)?;
    }

    out.write_all(b"\n")?;

    let facade: Facade = Facade::new(None, None);
    info!(ownership = ?facade.ownership(), "Running client with facade-owned subsystems");
    client_code(&facade, out)?;

    Ok(())
}
