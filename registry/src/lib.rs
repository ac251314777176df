use std::sync::Arc;

use adapter::client::access_control::AccessControlClientImpl;
use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::penalty::PenaltyRepositoryImpl;
use adapter::repository::rating::RatingRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::space::SpaceRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::client::access_control::AccessControlClient;
use kernel::repository::auth::AuthRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::penalty::PenaltyRepository;
use kernel::repository::rating::RatingRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::space::SpaceRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    penalty_repository: Arc<dyn PenaltyRepository>,
    rating_repository: Arc<dyn RatingRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    access_control_client: Arc<dyn AccessControlClient>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let space_repository = Arc::new(SpaceRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let penalty_repository = Arc::new(PenaltyRepositoryImpl::new(pool.clone()));
        let rating_repository = Arc::new(RatingRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(redis_client.clone()));
        let access_control_client =
            Arc::new(AccessControlClientImpl::new(&app_config.access_control));
        Self {
            health_check_repository,
            space_repository,
            reservation_repository,
            penalty_repository,
            rating_repository,
            user_repository,
            auth_repository,
            access_control_client,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn penalty_repository(&self) -> Arc<dyn PenaltyRepository> {
        self.penalty_repository.clone()
    }

    pub fn rating_repository(&self) -> Arc<dyn RatingRepository> {
        self.rating_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn access_control_client(&self) -> Arc<dyn AccessControlClient> {
        self.access_control_client.clone()
    }
}
