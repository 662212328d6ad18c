mod donation;
mod membership;
mod payment;
mod user;

pub use donation::{Donation, NewDonation};
pub use membership::{Membership, MembershipLevel, NewMembership, NewMembershipLevel};
pub use payment::Payment;
pub use user::{NewUser, Role, UpdateUser, User};
