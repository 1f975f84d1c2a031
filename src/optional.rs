use crate::error::OptionalError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 单值或空的不可变容器
///
/// 所有变换方法都消费原容器并返回新容器，容器本身没有任何修改方法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// 持有一个值
    Present(T),
    /// 没有值
    Absent,
}

impl<T> Optional<T> {
    /// 创建一个空容器
    pub const fn empty() -> Self {
        Optional::Absent
    }

    /// 创建一个确定有值的容器，传入 `None` 视为调用方逻辑错误
    pub fn of(value: Option<T>) -> Result<Self, OptionalError> {
        match value {
            Some(v) => Ok(Optional::Present(v)),
            None => Err(OptionalError::NullConstruction),
        }
    }

    /// 值在类型上已保证非空时使用
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// 值可能为空时使用，永不失败
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => Optional::Absent,
        }
    }

    /// 直接取值，空容器返回 [`OptionalError::AbsentValue`]
    pub fn get(&self) -> Result<&T, OptionalError> {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Absent => Err(OptionalError::AbsentValue),
        }
    }

    /// 消费容器取值，空容器返回 [`OptionalError::AbsentValue`]
    pub fn into_value(self) -> Result<T, OptionalError> {
        self.or_else_throw(|| OptionalError::AbsentValue)
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// 有值时执行回调，无值时什么也不做
    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(v) = self {
            f(v);
        }
    }

    pub fn if_present_or_else<F, G>(&self, f: F, g: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Optional::Present(v) => f(v),
            Optional::Absent => g(),
        }
    }

    /// 即时默认值：`default` 由调用方在调用前求值，无论容器是否有值
    pub fn or_else(self, default: T) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => default,
        }
    }

    /// 惰性默认值：`f` 只在容器为空时调用
    pub fn or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => f(),
        }
    }

    /// 容器为空时返回调用方自定义的错误
    pub fn or_else_throw<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Absent => Err(f()),
        }
    }

    /// 容器为空时惰性地换成另一个容器
    pub fn or<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Absent => f(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(v) => Optional::Present(f(v)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// 映射结果可能为空，按 [`Optional::of_nullable`] 包装
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flat_map(|v| Optional::of_nullable(f(v)))
    }

    /// `f` 自身返回容器，结果直接透传，不再二次包装
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(v) => f(v),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(v) => {
                if predicate(&v) {
                    Optional::Present(v)
                } else {
                    Optional::Absent
                }
            }
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Absent => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(v) => write!(f, "Optional[{}]", v),
            Optional::Absent => write!(f, "Optional.empty"),
        }
    }
}

// 序列化为裸值或 null，与 Option 保持一致
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().into_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::of_nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_ref_keeps_presence() {
        let value = Optional::present(String::from("mary"));
        assert_eq!(value.as_ref(), Optional::Present(&String::from("mary")));
        // 原容器仍可使用
        assert!(value.is_present());

        let empty: Optional<String> = Optional::empty();
        assert_eq!(empty.as_ref(), Optional::Absent);
    }

    #[test]
    fn test_into_value_reports_absence() {
        assert_eq!(Optional::present(7).into_value(), Ok(7));
        assert_eq!(
            Optional::<i32>::empty().into_value(),
            Err(OptionalError::AbsentValue)
        );
    }

    #[test]
    fn test_default_is_empty() {
        let value: Optional<u8> = Optional::default();
        assert!(value.is_empty());
    }
}
