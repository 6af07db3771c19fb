use std::io::{BufRead, Write};

use wage_core::{CompensationRecord, TermChanges};

use crate::console::{Console, InputError};
use crate::utils::format_fixed;

/// Asks for new salary, RSU and daily hours; a blank answer keeps the
/// stored value.
pub fn collect<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    record: &CompensationRecord,
) -> Result<TermChanges, InputError> {
    let profile = &record.profile;

    writeln!(console.out())?;
    writeln!(console.out(), "Updating record for {}", profile.name)?;
    writeln!(console.out(), "Leave blank to keep current value.")?;
    writeln!(console.out())?;

    let salary = console
        .prompt_optional_decimal(&format!("Current salary ${}: ", format_fixed(profile.salary, 2)))?;
    let rsu =
        console.prompt_optional_decimal(&format!("Current RSU ${}: ", format_fixed(profile.rsu, 2)))?;
    let daily_hours = console.prompt_optional_decimal(&format!(
        "Current daily hours {}: ",
        format_fixed(profile.daily_hours, 1)
    ))?;

    Ok(TermChanges {
        salary,
        rsu,
        daily_hours,
    })
}
