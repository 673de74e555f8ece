/*
[INPUT]:  Session presence and the area a caller wants to enter
[OUTPUT]: Redirect decision (to login, to home, or none)
[POS]:    Auth layer - routing guard for front ends
[UPDATE]: When protected/public areas change
*/

/// Where a route lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Login and registration
    Public,
    /// Everything that needs a session
    Protected,
}

/// Redirect a front end should perform before showing a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    ToLogin,
    ToHome,
}

/// Decide the redirect for entering `area` with or without a session.
///
/// Must be re-evaluated on every route change since login and logout can
/// happen from any screen.
pub fn redirect_for(authenticated: bool, area: Area) -> Option<Redirect> {
    match (authenticated, area) {
        (false, Area::Protected) => Some(Redirect::ToLogin),
        (true, Area::Public) => Some(Redirect::ToHome),
        _ => None,
    }
}
