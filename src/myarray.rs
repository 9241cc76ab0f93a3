//! ユーザー定義型でインデックスアクセスできる配列。

use std::marker::PhantomData;

/// 指定した型でインデックスアクセスできるジェネリック 1 次元配列。
///
/// インデックス型が `usize` に変換可能なことを想定している。
/// 範囲外のインデックスは通常の配列と同様に panic する。
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct MyArray1<V, K, const N: usize> {
    inner: [V; N],
    _phantom: PhantomData<fn() -> K>,
}

impl<V, K, const N: usize> MyArray1<V, K, N> {
    /// 内部配列を取り出す。
    pub fn into_inner(self) -> [V; N] {
        self.inner
    }
}

impl<V, K, const N: usize> From<[V; N]> for MyArray1<V, K, N> {
    fn from(inner: [V; N]) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
    }
}

impl<V, K: Into<usize>, const N: usize> std::ops::Index<K> for MyArray1<V, K, N> {
    type Output = V;

    fn index(&self, index: K) -> &Self::Output {
        &self.inner[index.into()]
    }
}

impl<V, K: Into<usize>, const N: usize> std::ops::IndexMut<K> for MyArray1<V, K, N> {
    fn index_mut(&mut self, index: K) -> &mut Self::Output {
        &mut self.inner[index.into()]
    }
}

impl<V: Copy + Default, K, const N: usize> Default for MyArray1<V, K, N> {
    fn default() -> Self {
        Self::from([V::default(); N])
    }
}

impl<V, K, const N: usize> std::ops::Deref for MyArray1<V, K, N> {
    type Target = [V; N];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<V, K, const N: usize> std::ops::DerefMut for MyArray1<V, K, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
