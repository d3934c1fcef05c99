/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
/// Instruction set used for the vector part of a kernel.
///
/// Every kernel has a scalar implementation that is always correct, vector
/// back ends process whole blocks and hand the remainder to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum SimdBackend {
    Scalar,
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    Sse41,
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    Avx2,
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    Neon,
}

impl SimdBackend {
    /// Widest back end supported by the running CPU
    #[allow(unreachable_code)]
    pub(crate) fn detect() -> SimdBackend {
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            return SimdBackend::Neon;
        }
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            #[cfg(feature = "avx")]
            {
                if std::arch::is_x86_feature_detected!("avx2") {
                    return SimdBackend::Avx2;
                }
            }
            #[cfg(feature = "sse")]
            {
                if std::arch::is_x86_feature_detected!("sse4.1") {
                    return SimdBackend::Sse41;
                }
            }
        }
        SimdBackend::Scalar
    }

    /// All back ends usable on the running CPU, scalar first
    #[allow(dead_code)]
    pub(crate) fn available() -> Vec<SimdBackend> {
        #[allow(unused_mut)]
        let mut backends = vec![SimdBackend::Scalar];
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            #[cfg(feature = "sse")]
            {
                if std::arch::is_x86_feature_detected!("sse4.1") {
                    backends.push(SimdBackend::Sse41);
                }
            }
            #[cfg(feature = "avx")]
            {
                if std::arch::is_x86_feature_detected!("avx2") {
                    backends.push(SimdBackend::Avx2);
                }
            }
        }
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            backends.push(SimdBackend::Neon);
        }
        backends
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_backend_is_available() {
        let available = SimdBackend::available();
        assert_eq!(available[0], SimdBackend::Scalar);
        assert!(available.contains(&SimdBackend::detect()));
    }
}
