//! SQLite adapter: exposes the color difference as a scalar SQL function.

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::Connection;

use crate::delta_e::color_delta;

/// Register the two-argument `colordelta` scalar function on a connection.
///
/// `SELECT colordelta('255,0,0', '0,0,255')` returns the ΔE* value as REAL.
/// A malformed triple fails the evaluating statement with the parse error;
/// NULL arguments are rejected by the text conversion.
pub fn register(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "colordelta",
        2,
        FunctionFlags::SQLITE_UTF8
            | FunctionFlags::SQLITE_DETERMINISTIC
            | FunctionFlags::SQLITE_INNOCUOUS,
        |ctx: &Context<'_>| {
            let rgb1 = ctx.get::<String>(0)?;
            let rgb2 = ctx.get::<String>(1)?;
            color_delta(&rgb1, &rgb2)
                .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))
        },
    )?;
    log::debug!("Registered scalar function 'colordelta'");
    Ok(())
}
