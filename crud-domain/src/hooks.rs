//! 变更钩子（Hooks）
//!
//! 调用方在新增/更新前后注入的同步回调。领域服务将其视为不透明回调，
//! 调用顺序固定为：`pre_process` → 核心操作 → `post_process`。
//! 钩子返回错误时立即中止并原样返回该错误。
//!
use crate::error::DomainResult;

/// 作用于单个实体的钩子
pub type EntityHook<'a, E> = Box<dyn FnOnce(&mut E) -> DomainResult<()> + Send + 'a>;

/// 更新前钩子：可同时看到旧实体与新实体（用于合并、审计等）
pub type MergeHook<'a, E> = Box<dyn FnOnce(&E, &mut E) -> DomainResult<()> + Send + 'a>;

/// 新增操作的可选钩子
pub struct AddHooks<'a, E> {
    pub(crate) pre_process: Option<EntityHook<'a, E>>,
    pub(crate) post_process: Option<EntityHook<'a, E>>,
}

impl<E> Default for AddHooks<'_, E> {
    fn default() -> Self {
        Self {
            pre_process: None,
            post_process: None,
        }
    }
}

impl<'a, E> AddHooks<'a, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 持久化之前修改待新增实体
    pub fn pre_process<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut E) -> DomainResult<()> + Send + 'a,
    {
        self.pre_process = Some(Box::new(f));
        self
    }

    /// 持久化之后修改返回的实体
    pub fn post_process<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut E) -> DomainResult<()> + Send + 'a,
    {
        self.post_process = Some(Box::new(f));
        self
    }
}

/// 更新操作的可选钩子
pub struct UpdateHooks<'a, E> {
    pub(crate) pre_process: Option<MergeHook<'a, E>>,
    pub(crate) post_process: Option<EntityHook<'a, E>>,
}

impl<E> Default for UpdateHooks<'_, E> {
    fn default() -> Self {
        Self {
            pre_process: None,
            post_process: None,
        }
    }
}

impl<'a, E> UpdateHooks<'a, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 持久化之前，基于旧实体调整新实体
    pub fn pre_process<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&E, &mut E) -> DomainResult<()> + Send + 'a,
    {
        self.pre_process = Some(Box::new(f));
        self
    }

    /// 持久化之后修改返回的实体
    pub fn post_process<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut E) -> DomainResult<()> + Send + 'a,
    {
        self.post_process = Some(Box::new(f));
        self
    }
}
