pub mod goals_model;
pub mod goals_progress;
pub mod goals_service;
pub mod goals_traits;

pub use goals_model::{
    Goal, GoalPeriod, GoalStatus, GoalUpdate, GoalView, GoalsQuery, GoalsSummary, NewGoal,
};
pub use goals_progress::{evaluate, GoalProgress};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
