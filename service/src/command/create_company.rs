//! [`Command`] for registering a new [`Company`].

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{company, Company},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for registering a new tenant [`Company`].
#[derive(Clone, Debug)]
pub struct CreateCompany {
    /// [`company::Name`] of the new [`Company`].
    pub name: company::Name,

    /// [`company::TaxCode`] of the new [`Company`]. Must be unique.
    pub tax_code: company::TaxCode,

    /// Contact [`company::Email`] of the new [`Company`].
    pub email: Option<company::Email>,

    /// Registered [`company::Address`] of the new [`Company`].
    pub address: Option<company::Address>,
}

impl<Db> Command<CreateCompany> for Service<Db>
where
    Db: for<'c> Database<
            Select<By<Option<Company>, &'c company::TaxCode>>,
            Ok = Option<Company>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<company::New>,
            Ok = Company,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Company;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateCompany,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateCompany {
            name,
            tax_code,
            email,
            address,
        } = cmd;

        let existing = self
            .database()
            .execute(Select(By::new(&tax_code)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            return Err(tracerr::new!(E::TaxCodeTaken(tax_code)));
        }

        self.database()
            .execute(Insert(company::New {
                name,
                tax_code,
                email,
                address,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map_err(|e| {
                // The unique constraint catches a racing registration.
                if matches!(e.as_ref(), E::Db(db) if db.is_unique_violation())
                {
                    tracerr::new!(E::TaxCodeRaced)
                } else {
                    e
                }
            })
    }
}

/// Error of [`CreateCompany`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Another [`Company`] won a race for the same tax code.
    #[display("Tax code was taken concurrently")]
    TaxCodeRaced,

    /// [`company::TaxCode`] is already registered.
    #[display("`{_0}` tax code is already registered")]
    TaxCodeTaken(#[error(not(source))] company::TaxCode),
}
