//! Command execution against the catalog service
//!
//! The list command loads the full catalog once and narrows it locally;
//! add/edit run the validation engine before anything goes over the wire.
//! Remote failures surface as a single message, field failures as the
//! field → message mapping. Nothing is retried.

use std::io::{self, BufRead, Write};

use eyre::{bail, Result};
use tracing::{error, info};
use uuid::Uuid;

use domain_catalog::{
    CatalogApi, CatalogService, CatalogView, DraftProduct, Product, ProductFilter, ProductForm,
};

/// Load the catalog, apply the filter locally, render the view
pub async fn list<C: CatalogApi>(
    service: &CatalogService<C>,
    filter: ProductFilter,
) -> Result<()> {
    let catalog = match service.load_catalog().await {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Failed to fetch products: {}", err.display_message());
            bail!("could not load the catalog");
        }
    };

    let mut view = CatalogView::new();
    view.set_catalog(catalog);
    view.apply_filter(filter);

    if view.products().is_empty() {
        println!("No products yet.");
    } else {
        for product in view.products() {
            print_product(product);
        }
    }
    println!(
        "{} of {} products shown",
        view.products().len(),
        view.catalog().len()
    );
    Ok(())
}

/// Fetch and render a single product
pub async fn show<C: CatalogApi>(service: &CatalogService<C>, id: Uuid) -> Result<()> {
    match service.get_product(id).await {
        Ok(product) => {
            print_product(&product);
            Ok(())
        }
        Err(err) => {
            error!("Failed to fetch product {}: {}", id, err.display_message());
            bail!("could not load product {id}");
        }
    }
}

/// Validate a fresh draft and create it on the backend
pub async fn add<C: CatalogApi>(service: &CatalogService<C>, draft: DraftProduct) -> Result<()> {
    let mut form = ProductForm::create();
    form.draft = draft;
    submit(service, form).await
}

/// Load an existing product, overlay the provided fields, validate, update
pub async fn edit<C: CatalogApi>(
    service: &CatalogService<C>,
    id: Uuid,
    name: Option<String>,
    price: Option<String>,
    category: Option<String>,
    description: Option<String>,
    available: Option<bool>,
) -> Result<()> {
    let existing = service.get_product(id).await.map_err(|err| {
        error!("Failed to fetch product {}: {}", id, err.display_message());
        eyre::eyre!("could not load product {id}")
    })?;

    let mut form = ProductForm::edit(&existing);
    if let Some(name) = name {
        form.draft.name = name;
    }
    if let Some(price) = price {
        form.draft.price = price;
    }
    if let Some(category) = category {
        form.draft.category = category;
    }
    if let Some(description) = description {
        form.draft.description = description;
    }
    if let Some(available) = available {
        form.draft.available = available;
    }
    submit(service, form).await
}

/// Confirm, then delete a product
pub async fn delete<C: CatalogApi>(
    service: &CatalogService<C>,
    id: Uuid,
    skip_confirmation: bool,
) -> Result<()> {
    if !skip_confirmation && !confirm(&format!("Delete product {}? [y/N] ", id))? {
        println!("Aborted.");
        return Ok(());
    }

    match service.delete_product(id).await {
        Ok(receipt) => {
            info!(%id, "product deleted");
            println!(
                "Deleted product {}{}",
                id,
                receipt
                    .message
                    .map(|m| format!(" ({})", m))
                    .unwrap_or_default()
            );
            Ok(())
        }
        Err(err) => {
            // surfaced on the dialog, one message, no retry
            eprintln!("{}", err.display_message());
            bail!("product {id} was not deleted");
        }
    }
}

/// Shared create/update path: validate locally first, then submit; a
/// remote failure is merged into the form's error mapping for display.
async fn submit<C: CatalogApi>(service: &CatalogService<C>, mut form: ProductForm) -> Result<()> {
    if !form.validate() {
        print_errors(&form);
        bail!("nothing was submitted");
    }

    let result = match form.editing() {
        Some(id) => service.update_product(id, &form.draft).await,
        None => service.create_product(&form.draft).await,
    };

    match result {
        Ok(product) => {
            info!(id = %product.id, "product saved");
            print_product(&product);
            Ok(())
        }
        Err(err) => {
            form.record_backend_error(err.display_message());
            print_errors(&form);
            bail!("nothing was saved");
        }
    }
}

fn print_product(product: &Product) {
    println!(
        "{}  {}  ${}  category: {}  available: {}",
        product.id,
        product.name.to_uppercase(),
        product.display_price(),
        product.category,
        if product.available { "yes" } else { "no" },
    );
    if !product.description.is_empty() {
        println!("    {}", product.description);
    }
}

fn print_errors(form: &ProductForm) {
    for (field, messages) in form.errors().iter() {
        for message in messages {
            eprintln!("{}: {}", field, message);
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
