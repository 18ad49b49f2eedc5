use crate::config::ReferenceDirectionsConfig;
use crate::error::Error;
use crate::factory::{BoundaryPoints, DasDennis, DasDennisByCount, ReferenceDirectionsFactory};

#[test]
fn factories_generate_their_sets()
{
    let config = ReferenceDirectionsConfig::default();

    let factories: Vec<Box<dyn ReferenceDirectionsFactory>> = vec![
        Box::new(DasDennis::new(3, 12)),
        Box::new(DasDennisByCount::new(3, 92)),
        Box::new(BoundaryPoints::new(2)),
    ];

    let sizes: Vec<usize> = factories
        .iter()
        .map(|factory| factory.generate(&config).unwrap().len())
        .collect();

    assert_eq!(sizes, vec![91, 91, 4]);
    assert_eq!(factories[0].name(), "Das-Dennis (3 12)");
    assert_eq!(factories[1].name(), "Das-Dennis (3 ~92)");
}

#[test]
fn boxed_factories_can_be_cloned()
{
    let factory: Box<dyn ReferenceDirectionsFactory> = Box::new(DasDennis::new(4, 3));
    let cloned = factory.clone();

    let config = ReferenceDirectionsConfig::default();

    assert_eq!(cloned.n_obj(), 4);
    assert_eq!(cloned.generate(&config).unwrap(), factory.generate(&config).unwrap());
}

#[test]
fn factory_errors_surface_on_generate()
{
    let config = ReferenceDirectionsConfig::default();

    assert!(matches!(
        BoundaryPoints::new(3).generate(&config),
        Err(Error::DimensionMismatch { expected: 2, actual: 3 })
    ));
}
