pub use super::gift_certificate::Entity as GiftCertificate;
pub use super::gift_certificate_tag::Entity as GiftCertificateTag;
pub use super::order::Entity as Order;
pub use super::order_gift_certificate::Entity as OrderGiftCertificate;
pub use super::purchase::Entity as Purchase;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
