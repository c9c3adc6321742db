//! 领域层统一错误定义
//!
//! 调用方需要区分三类失败，各自的处理方式不同：
//! - `InvalidArgument`：输入有误（修正输入）；
//! - `NotFound`：记录不存在（接受缺失）；
//! - 其余（`DataService`/`Conflict`）：存储层失败（排查存储），由领域服务原样透传。
//!
use crate::entity::{Entity, entity_name};
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 参数校验 ---
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // --- 查找 ---
    #[error("not found: entity={entity}, id={id}")]
    NotFound { entity: &'static str, id: String },

    // --- 数据服务/存储 ---
    #[error("conflict: entity={entity}, id={id} already exists")]
    Conflict { entity: &'static str, id: String },
    #[error("data service error: {reason}")]
    DataService { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        DomainError::NotFound {
            entity: entity_name::<E>(),
            id: id.to_string(),
        }
    }

    pub fn conflict<E: Entity>(id: &E::Id) -> Self {
        DomainError::Conflict {
            entity: entity_name::<E>(),
            id: id.to_string(),
        }
    }

    pub fn data_service(reason: impl Into<String>) -> Self {
        DomainError::DataService {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DomainError::InvalidArgument { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
