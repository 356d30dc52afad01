use crate::core::models::category::SubCategory;
use crate::core::models::descriptor::{ContactDescriptor, Descriptor};
use crate::core::models::ids::DoubletId;
use crate::core::models::pair::PairType;

/// Read-only view over one annotation program's contacts for one structure.
///
/// All lookups take short identifiers (`pos1:pos2`). A miss is not an error:
/// the program simply did not recognize that doublet.
pub trait ContactSource {
    /// Short identifiers of every contact, in file order.
    fn list_ids(&self) -> Vec<DoubletId>;

    fn has_contact(&self, id: &DoubletId) -> bool;

    /// The short and detailed descriptor of the contact, or `None` if the
    /// program did not recognize it.
    fn descriptor(&self, id: &DoubletId) -> Option<ContactDescriptor>;

    /// The descriptor of the contact restricted to one sub-category.
    ///
    /// With `detail` set, the detailed descriptor is returned instead of the
    /// short one.
    fn category_descriptor(
        &self,
        id: &DoubletId,
        category: SubCategory,
        detail: bool,
    ) -> Option<Descriptor>;

    /// Pair type recorded for the contact, if the source carries one.
    fn pair_type(&self, id: &DoubletId) -> Option<PairType>;

    /// Whether the contact is the mirrored listing of another contact in
    /// the same source.
    fn is_reverse(&self, id: &DoubletId) -> bool;
}
