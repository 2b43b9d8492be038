macro_rules! drop_table_down {
    ($manager:expr, $entity:expr) => {
        $manager
            .drop_table(Table::drop().if_exists().table($entity).to_owned())
            .await
    };
}

pub(crate) use drop_table_down;
