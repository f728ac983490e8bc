//! Salary rule definitions.

use common::define_kind;

define_kind! {
    #[doc = "Status of a salary rule binding a bonus rate to a \
             serviced role."]
    enum Status {
        #[doc = "The rule applies to bonus calculations."]
        Active = 1,

        #[doc = "The rule is kept for history only."]
        Disabled = 2,
    }
}
