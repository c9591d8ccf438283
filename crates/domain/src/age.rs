// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;

/// Computes an age in full elapsed years.
///
/// The year difference is reduced by one when the reference date's
/// (month, day) falls before the birth (month, day). A person born on
/// February 29 therefore turns a year older on March 1 in common years.
///
/// # Arguments
///
/// * `date_of_birth` - The birth date
/// * `as_of` - The reference date, usually today
///
/// # Returns
///
/// The number of birthdays that have passed by `as_of`.
///
/// # Errors
///
/// Returns `DomainError::BirthDateInFuture` if `date_of_birth` is after `as_of`.
pub fn compute_age(date_of_birth: Date, as_of: Date) -> Result<u32, DomainError> {
    if date_of_birth > as_of {
        return Err(DomainError::BirthDateInFuture {
            date_of_birth,
            as_of,
        });
    }

    let mut years: i32 = as_of.year() - date_of_birth.year();

    let birthday_pending: bool = (u8::from(as_of.month()), as_of.day())
        < (u8::from(date_of_birth.month()), date_of_birth.day());
    if birthday_pending {
        years -= 1;
    }

    Ok(years.max(0).unsigned_abs())
}
