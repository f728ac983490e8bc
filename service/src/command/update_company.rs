//! [`Command`] for updating a [`Company`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{company, Company},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a tenant [`Company`]'s registered details.
#[derive(Clone, Debug)]
pub struct UpdateCompany {
    /// ID of the [`Company`] to update.
    pub company_id: company::Id,

    /// [`company::Patch`] to apply.
    pub patch: company::Patch,
}

impl<Db> Command<UpdateCompany> for Service<Db>
where
    Db: Database<
            Select<By<Option<Company>, company::Id>>,
            Ok = Option<Company>,
            Err = Traced<database::Error>,
        > + for<'c> Database<
            Select<By<Option<Company>, &'c company::TaxCode>>,
            Ok = Option<Company>,
            Err = Traced<database::Error>,
        > + Database<Update<Company>, Err = Traced<database::Error>>,
{
    type Ok = Company;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        UpdateCompany { company_id, patch }: UpdateCompany,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let mut company = self
            .database()
            .execute(Select(By::<Option<Company>, _>::new(company_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CompanyNotExists(company_id))
            .map_err(tracerr::wrap!())?;

        if let Some(tax_code) = &patch.tax_code {
            let other = self
                .database()
                .execute(Select(By::<Option<Company>, _>::new(tax_code)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            // The company's own row never blocks its update.
            if other.is_some_and(|c| c.id != company_id) {
                return Err(tracerr::new!(E::TaxCodeTaken(tax_code.clone())));
            }
        }

        patch.apply_to(&mut company);

        self.database()
            .execute(Update(company.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map_err(|e| {
                if matches!(e.as_ref(), E::Db(db) if db.is_unique_violation())
                {
                    tracerr::new!(E::TaxCodeRaced)
                } else {
                    e
                }
            })
            .map(drop)?;

        Ok(company)
    }
}

/// Error of [`UpdateCompany`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Company`] with the provided ID does not exist.
    #[display("`Company(id: {_0})` does not exist")]
    CompanyNotExists(#[error(not(source))] company::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Another [`Company`] won a race for the same tax code.
    #[display("Tax code was taken concurrently")]
    TaxCodeRaced,

    /// [`company::TaxCode`] is already registered to another [`Company`].
    #[display("`{_0}` tax code is already registered")]
    TaxCodeTaken(#[error(not(source))] company::TaxCode),
}
