use crate::data::{person::PersonRepository, species::SpeciesRepository};

use super::*;

/// Expect residents & species to survive with their homeworld unset
#[tokio::test]
async fn unsets_homeworld_of_residents_and_species() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;
    let human = test.catalog().insert_species("Human", Some(tatooine.id)).await?;
    let luke = test
        .catalog()
        .insert_person("Luke Skywalker", Some(human.id), Some(tatooine.id))
        .await?;

    let planet_service = PlanetService::new(&test.db);
    planet_service.delete(tatooine.id).await.unwrap();

    let luke = PersonRepository::new(&test.db).get(luke.id).await?.unwrap();
    assert_eq!(luke.homeworld_id, None);
    assert_eq!(luke.species_id, Some(human.id));
    let human = SpeciesRepository::new(&test.db).get(human.id).await?.unwrap();
    assert_eq!(human.homeworld_id, None);

    Ok(())
}

/// Expect NotFound on the second delete of the same planet
#[tokio::test]
async fn fails_when_already_deleted() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;

    let planet_service = PlanetService::new(&test.db);
    assert!(planet_service.delete(tatooine.id).await.is_ok());
    let result = planet_service.delete(tatooine.id).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound { .. }))
    ));

    Ok(())
}
