use crate::schema::GraphQLOperationType;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::convert::From<OperationKind> for GraphQLOperationType {
    fn from(value: OperationKind) -> Self {
        match value {
            OperationKind::Mutation => GraphQLOperationType::Mutation,
            OperationKind::Query => GraphQLOperationType::Query,
            OperationKind::Subscription => GraphQLOperationType::Subscription,
        }
    }
}
