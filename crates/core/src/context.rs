/// Ids captured by earlier scenarios for use by later ones. A slot stays `None`
/// when the scenario that populates it did not get that far; downstream
/// scenarios must check and record a failure rather than panic.
#[derive(Debug, Default)]
pub struct RunContext {
    pub user_id: Option<String>,
    pub item_id: Option<String>,
    pub booking_id: Option<String>,
    pub admin_user_id: Option<String>,
}
