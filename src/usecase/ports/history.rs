/// The address the shell keeps in sync with the dynamic grid.
///
/// `replace` swaps the current entry in place; it never triggers a reload.
pub trait AddressHistory {
    fn current(&self) -> String;
    fn replace(&mut self, query: String);
}
