use akkor_shared::user::Actor;
use time::Date;

/// A booking may be changed or removed by its owner or by an admin.
/// Employees get no extra rights here.
pub fn can_manage(actor: &Actor, booking_user_id: i64) -> bool {
    actor.is_admin() || actor.id == booking_user_id
}

/// A new stay starts today or later and lasts at least one night.
pub fn validate_new_stay(check_in: Date, check_out: Date, today: Date) -> akkor_shared::Result<()> {
    if check_in < today {
        akkor_shared::user!("Check-in date must be in the future");
    }

    validate_range(check_in, check_out)
}

/// Revalidates an edited stay. A check-in that was not submitted keeps its
/// stored value and is not compared to today, so past bookings can still
/// have their status changed. The resulting range must stay ordered.
pub fn validate_updated_stay(
    current: (Date, Date),
    check_in: Option<Date>,
    check_out: Option<Date>,
    today: Date,
) -> akkor_shared::Result<(Date, Date)> {
    if let Some(check_in) = check_in {
        if check_in < today {
            akkor_shared::user!("Check-in date must be in the future");
        }
    }

    let check_in = check_in.unwrap_or(current.0);
    let check_out = check_out.unwrap_or(current.1);
    validate_range(check_in, check_out)?;

    Ok((check_in, check_out))
}

fn validate_range(check_in: Date, check_out: Date) -> akkor_shared::Result<()> {
    if check_out <= check_in {
        akkor_shared::user!("Check-out must be after check-in");
    }

    Ok(())
}
