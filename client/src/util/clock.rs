//! Calendar date for stamping new profiles.

/// Today's local date as `dd/mm/yyyy`.
///
/// Uses the browser clock in hydrate builds and UTC elsewhere.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        super::format::format_date(now.get_date(), now.get_month() + 1, year)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_utc();
        super::format::format_date(u32::from(now.day()), u32::from(u8::from(now.month())), now.year())
    }
}
